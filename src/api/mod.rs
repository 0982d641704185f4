//! Gateway clients for the remote forum services.
//!
//! One client per resource, all rooted at `/api/v1/{resource}`. The session
//! token is always an explicit argument: a `token` query parameter on GET and
//! a `token` body field on POST/DELETE. It never travels in a header.
//!
//! Operations returning `bool` collapse every failure into `false`, so
//! callers cannot tell a timeout from a rejection.

mod auth;
mod client;
mod error;
mod groups;
mod posts;

use std::fmt;

use reqwest::Client;

use crate::config::ApiConfig;

pub use auth::{AuthApi, AuthResponse};
pub use client::ServiceClient;
pub use error::ApiError;
pub use groups::{GroupDetail, GroupsApi};
pub use posts::{PostResponse, PostsApi, VoteKind};

/// Backend resource groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Auth,
    Groups,
    Posts,
}

impl Resource {
    pub const ALL: [Resource; 3] = [Resource::Auth, Resource::Groups, Resource::Posts];

    /// Path segment under `/api/v1`.
    pub fn path(&self) -> &'static str {
        match self {
            Resource::Auth => "auth",
            Resource::Groups => "groups",
            Resource::Posts => "posts",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// The three resource clients, sharing one connection pool.
#[derive(Clone)]
pub struct Gateway {
    pub auth: AuthApi,
    pub groups: GroupsApi,
    pub posts: PostsApi,
}

impl Gateway {
    pub fn from_config(config: &ApiConfig) -> Result<Self, ApiError> {
        let http = Client::builder()
            .connect_timeout(config.connect_timeout())
            .build()
            .map_err(ApiError::ClientBuild)?;

        let service = |resource: Resource| {
            ServiceClient::new(
                http.clone(),
                config.service_url(resource),
                resource,
                config.timeout(),
            )
        };

        Ok(Self {
            auth: AuthApi::new(service(Resource::Auth)?),
            groups: GroupsApi::new(service(Resource::Groups)?),
            posts: PostsApi::new(service(Resource::Posts)?),
        })
    }
}
