//! Session Model
//!
//! Identity of the signed-in user as handed over by the hosting page.
//! The view layer only reads it; permission enforcement lives on the backend
//! and the checks below only decide what is shown.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{Order, Restaurant};
use crate::error::SessionError;

/// User role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Manager,
    Member,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Manager => "manager",
            Self::Member => "member",
        }
    }
}

impl FromStr for Role {
    type Err = SessionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "admin" => Ok(Self::Admin),
            "manager" => Ok(Self::Manager),
            "member" => Ok(Self::Member),
            "" => Err(SessionError::Missing("role")),
            other => Err(SessionError::UnknownRole(other.to_string())),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Read-only session context, established once per page load
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    user_name: String,
    role: Role,
    country: String,
}

impl Session {
    pub fn new(user_name: impl Into<String>, role: Role, country: impl Into<String>) -> Self {
        Self {
            user_name: user_name.into(),
            role,
            country: country.into(),
        }
    }

    /// Build a session from the raw values the host provides
    pub fn parse(user_name: &str, role: &str, country: &str) -> Result<Self, SessionError> {
        Ok(Self::new(user_name.trim(), role.parse()?, country.trim()))
    }

    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    pub fn is_member(&self) -> bool {
        self.role == Role::Member
    }

    /// Non-admins only see restaurants of their own country
    pub fn can_see_restaurant(&self, restaurant: &Restaurant) -> bool {
        self.is_admin() || restaurant.country == self.country
    }

    /// Cancel control is shown for live orders to admins and managers
    pub fn can_cancel(&self, order: &Order) -> bool {
        !order.is_cancelled() && !self.is_member()
    }

    /// Members never check out
    pub fn can_checkout(&self) -> bool {
        !self.is_member()
    }

    /// Only admins manage payment methods
    pub fn can_manage_payment_methods(&self) -> bool {
        self.is_admin()
    }

    /// Country whose currency applies to `order`
    pub fn order_country<'a>(&'a self, order: &'a Order) -> &'a str {
        order
            .country
            .as_deref()
            .filter(|c| !c.is_empty())
            .unwrap_or(&self.country)
    }
}
