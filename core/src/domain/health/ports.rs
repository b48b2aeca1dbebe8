use crate::domain::{
    common::entities::app_errors::CoreError, health::entities::StoreHealthStatus,
};

pub trait HealthCheckService: Send + Sync {
    fn readness(&self) -> impl Future<Output = Result<StoreHealthStatus, CoreError>> + Send;
}
