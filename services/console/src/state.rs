use sea_orm::DatabaseConnection;

use crate::infra::db::{
    DbAppointmentRepository, DbBlogPostRepository, DbBusinessRepository,
    DbNotificationRepository, DbPortfolioRepository, DbProfileRepository,
};
use crate::infra::gate::HttpSessionGate;
use crate::infra::revalidate::HttpRevalidator;

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub gate: HttpSessionGate,
    pub revalidator: HttpRevalidator,
    /// Public origin of the dashboard, used for confirmation redirects.
    pub site_url: String,
    pub cookie_domain: String,
}

impl AppState {
    pub fn gate(&self) -> HttpSessionGate {
        self.gate.clone()
    }

    pub fn revalidator(&self) -> HttpRevalidator {
        self.revalidator.clone()
    }

    pub fn business_repo(&self) -> DbBusinessRepository {
        DbBusinessRepository {
            db: self.db.clone(),
        }
    }

    pub fn profile_repo(&self) -> DbProfileRepository {
        DbProfileRepository {
            db: self.db.clone(),
        }
    }

    pub fn notification_repo(&self) -> DbNotificationRepository {
        DbNotificationRepository {
            db: self.db.clone(),
        }
    }

    pub fn blog_post_repo(&self) -> DbBlogPostRepository {
        DbBlogPostRepository {
            db: self.db.clone(),
        }
    }

    pub fn appointment_repo(&self) -> DbAppointmentRepository {
        DbAppointmentRepository {
            db: self.db.clone(),
        }
    }

    pub fn portfolio_repo(&self) -> DbPortfolioRepository {
        DbPortfolioRepository {
            db: self.db.clone(),
        }
    }
}
