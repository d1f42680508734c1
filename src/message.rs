use crate::api::models::{ActivitySample, PerformanceMetric, SessionSample, UserProfile};

/// Every fetch result carries the user id the request was issued for, so
/// stale in-flight responses can be discarded after a user switch.
#[derive(Debug, Clone)]
pub enum Message {
    SelectUser(u32),
    ProfileLoaded(u32, Result<UserProfile, String>),
    ActivityLoaded(u32, Result<Vec<ActivitySample>, String>),
    SessionsLoaded(u32, Result<Vec<SessionSample>, String>),
    PerformanceLoaded(u32, Result<Vec<PerformanceMetric>, String>),
}
