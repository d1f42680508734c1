use std::env;

use iced::{Element, Task, Theme};
use tracing::{debug, info};

use crate::api::models::{ActivitySample, PerformanceMetric, SessionSample, UserProfile};
use crate::api::ApiClient;
use crate::message::Message;
use crate::state::LoadState;

pub const DEFAULT_USER_ID: u32 = 12;

pub struct App {
    theme: Theme,
    client: ApiClient,
    user_id: u32,
    profile: LoadState<UserProfile>,
    activity: LoadState<Vec<ActivitySample>>,
    sessions: LoadState<Vec<SessionSample>>,
    performance: LoadState<Vec<PerformanceMetric>>,
}

impl App {
    pub fn new() -> (Self, Task<Message>) {
        let user_id = env::var("SPORTSEE_USER_ID")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(DEFAULT_USER_ID);

        let app = Self::with_client(ApiClient::from_env(), user_id);
        let task = app.load_user(user_id);
        (app, task)
    }

    fn with_client(client: ApiClient, user_id: u32) -> Self {
        Self {
            theme: Theme::Light,
            client,
            user_id,
            profile: LoadState::Loading,
            activity: LoadState::Loading,
            sessions: LoadState::Loading,
            performance: LoadState::Loading,
        }
    }

    /// Four independent one-shot fetches, each tagged with the user id it
    /// was issued for.
    fn load_user(&self, user_id: u32) -> Task<Message> {
        info!(user_id, "loading dashboard data");

        let profile = {
            let client = self.client.clone();
            Task::perform(
                async move {
                    client
                        .fetch_profile(user_id)
                        .await
                        .map_err(|err| err.to_string())
                },
                move |result| Message::ProfileLoaded(user_id, result),
            )
        };

        let activity = {
            let client = self.client.clone();
            Task::perform(
                async move {
                    client
                        .fetch_activity(user_id)
                        .await
                        .map_err(|err| err.to_string())
                },
                move |result| Message::ActivityLoaded(user_id, result),
            )
        };

        let sessions = {
            let client = self.client.clone();
            Task::perform(
                async move {
                    client
                        .fetch_average_sessions(user_id)
                        .await
                        .map_err(|err| err.to_string())
                },
                move |result| Message::SessionsLoaded(user_id, result),
            )
        };

        let performance = {
            let client = self.client.clone();
            Task::perform(
                async move {
                    client
                        .fetch_performance(user_id)
                        .await
                        .map_err(|err| err.to_string())
                },
                move |result| Message::PerformanceLoaded(user_id, result),
            )
        };

        Task::batch([profile, activity, sessions, performance])
    }

    /// An in-flight response for a previous user id must never overwrite
    /// the current user's chart state.
    fn is_stale(&self, user_id: u32, resource: &str) -> bool {
        if user_id == self.user_id {
            return false;
        }
        debug!(
            user_id,
            current = self.user_id,
            resource,
            "discarding stale response"
        );
        true
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::SelectUser(user_id) => {
                self.user_id = user_id;
                self.profile = LoadState::Loading;
                self.activity = LoadState::Loading;
                self.sessions = LoadState::Loading;
                self.performance = LoadState::Loading;
                self.load_user(user_id)
            }
            Message::ProfileLoaded(user_id, result) => {
                if !self.is_stale(user_id, "profile") {
                    self.profile = LoadState::resolve(result);
                }
                Task::none()
            }
            Message::ActivityLoaded(user_id, result) => {
                if !self.is_stale(user_id, "activity") {
                    self.activity = LoadState::resolve(result);
                }
                Task::none()
            }
            Message::SessionsLoaded(user_id, result) => {
                if !self.is_stale(user_id, "average-sessions") {
                    self.sessions = LoadState::resolve(result);
                }
                Task::none()
            }
            Message::PerformanceLoaded(user_id, result) => {
                if !self.is_stale(user_id, "performance") {
                    self.performance = LoadState::resolve(result);
                }
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        crate::screens::dashboard::view(
            self.user_id,
            &self.profile,
            &self.activity,
            &self.sessions,
            &self.performance,
        )
    }

    pub fn theme(&self) -> Theme {
        self.theme.clone()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn app() -> App {
        App::with_client(ApiClient::new("http://localhost:3001"), DEFAULT_USER_ID)
    }

    fn samples() -> Vec<ActivitySample> {
        vec![ActivitySample {
            day: "1".to_owned(),
            kilogram: 80.0,
            calories: 240.0,
        }]
    }

    #[test]
    fn successful_fetch_moves_the_slot_to_ready() {
        let mut app = app();
        let _ = app.update(Message::ActivityLoaded(DEFAULT_USER_ID, Ok(samples())));

        assert_eq!(app.activity.ready(), Some(&samples()));
    }

    #[test]
    fn failed_fetch_is_terminal_and_keeps_the_message() {
        let mut app = app();
        let _ = app.update(Message::ActivityLoaded(
            DEFAULT_USER_ID,
            Err("network error: 404 Not Found".to_owned()),
        ));

        let error = app.activity.error().unwrap();
        assert!(error.contains("404 Not Found"));
    }

    #[test]
    fn one_chart_failing_leaves_the_others_untouched() {
        let mut app = app();
        let _ = app.update(Message::ActivityLoaded(DEFAULT_USER_ID, Ok(samples())));
        let _ = app.update(Message::SessionsLoaded(
            DEFAULT_USER_ID,
            Err("network error: 500 Internal Server Error".to_owned()),
        ));

        assert!(app.activity.ready().is_some());
        assert!(app.sessions.error().is_some());
        assert!(app.performance.is_loading());
    }

    #[test]
    fn stale_response_for_a_previous_user_is_discarded() {
        let mut app = app();
        let _ = app.update(Message::SelectUser(18));

        // The old user's request resolves after the switch.
        let _ = app.update(Message::ActivityLoaded(12, Ok(samples())));

        assert!(app.activity.is_loading());
    }

    #[test]
    fn selecting_a_user_resets_every_slot_to_loading() {
        let mut app = app();
        let _ = app.update(Message::ActivityLoaded(DEFAULT_USER_ID, Ok(samples())));
        let _ = app.update(Message::SelectUser(18));

        assert_eq!(app.user_id, 18);
        assert!(app.profile.is_loading());
        assert!(app.activity.is_loading());
        assert!(app.sessions.is_loading());
        assert!(app.performance.is_loading());
    }

    #[test]
    fn redelivering_the_same_payload_is_idempotent() {
        let mut app = app();
        let _ = app.update(Message::ActivityLoaded(DEFAULT_USER_ID, Ok(samples())));
        let first = app.activity.ready().cloned();

        let _ = app.update(Message::ActivityLoaded(DEFAULT_USER_ID, Ok(samples())));
        assert_eq!(app.activity.ready().cloned(), first);
    }
}
