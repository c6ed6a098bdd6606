// Scripted in-memory client for unit tests.
//
// Each `FakeEndpoint` holds a queue of expected calls with canned replies.
// A call consumes the first matching expectation; a call with no matching
// expectation panics, so tests fail loudly on unexpected traffic. Every
// call is recorded and can be inspected afterwards.

use std::fmt::Debug;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::client::Site24x7;
use crate::endpoints::{
    AmazonMonitors, Endpoint, Entity, LocationProfiles, MonitorGroups, NotificationProfiles,
    RestApiMonitors, SslMonitors, ThresholdProfiles, UrlAutomations, UserGroups, WebsiteMonitors,
};
use crate::error::Error;
use crate::models::{
    AmazonMonitor, LocationProfile, MonitorGroup, NotificationProfile, RestApiMonitor, SslMonitor,
    ThresholdProfile, UrlAutomation, UserGroup, WebsiteMonitor,
};

/// A call observed by a [`FakeEndpoint`].
#[derive(Debug, Clone, PartialEq)]
pub enum Call<T> {
    Get(String),
    Create(T),
    Update(T),
    Delete(String),
    List,
}

enum Expectation<T> {
    Get { id: String, reply: Result<T, Error> },
    Create { entity: T, reply: Result<T, Error> },
    Update { entity: T, reply: Result<T, Error> },
    Delete { id: String, reply: Result<(), Error> },
    List { reply: Result<Vec<T>, Error> },
}

/// Scripted [`Endpoint`] for one entity kind.
pub struct FakeEndpoint<T> {
    expectations: Mutex<Vec<Expectation<T>>>,
    calls: Mutex<Vec<Call<T>>>,
}

impl<T> Default for FakeEndpoint<T> {
    fn default() -> Self {
        Self {
            expectations: Mutex::new(Vec::new()),
            calls: Mutex::new(Vec::new()),
        }
    }
}

impl<T: Entity + PartialEq + Debug> FakeEndpoint<T> {
    pub fn on_get(&self, id: &str, reply: Result<T, Error>) -> &Self {
        self.expect(Expectation::Get {
            id: id.to_owned(),
            reply,
        })
    }

    pub fn on_create(&self, entity: T, reply: Result<T, Error>) -> &Self {
        self.expect(Expectation::Create { entity, reply })
    }

    pub fn on_update(&self, entity: T, reply: Result<T, Error>) -> &Self {
        self.expect(Expectation::Update { entity, reply })
    }

    pub fn on_delete(&self, id: &str, reply: Result<(), Error>) -> &Self {
        self.expect(Expectation::Delete {
            id: id.to_owned(),
            reply,
        })
    }

    pub fn on_list(&self, reply: Result<Vec<T>, Error>) -> &Self {
        self.expect(Expectation::List { reply })
    }

    /// Every call made so far, in order.
    pub fn calls(&self) -> Vec<Call<T>> {
        self.calls.lock().expect("fake lock poisoned").clone()
    }

    /// Panics if any scripted expectation was never consumed.
    pub fn assert_done(&self) {
        let pending = self.expectations.lock().expect("fake lock poisoned").len();
        assert_eq!(
            pending,
            0,
            "{pending} expected {} call(s) never happened",
            T::RESOURCE
        );
    }

    fn expect(&self, expectation: Expectation<T>) -> &Self {
        self.expectations
            .lock()
            .expect("fake lock poisoned")
            .push(expectation);
        self
    }

    /// Record `call` and remove the first expectation `matches` accepts.
    fn take(
        &self,
        call: Call<T>,
        matches: impl Fn(&Expectation<T>) -> bool,
    ) -> Expectation<T> {
        self.calls
            .lock()
            .expect("fake lock poisoned")
            .push(call.clone());

        let mut expectations = self.expectations.lock().expect("fake lock poisoned");
        match expectations.iter().position(matches) {
            Some(index) => expectations.remove(index),
            None => panic!("unexpected call on fake {} endpoint: {call:?}", T::RESOURCE),
        }
    }
}

#[async_trait]
impl<T: Entity + PartialEq + Debug> Endpoint<T> for FakeEndpoint<T> {
    async fn get(&self, id: &str) -> Result<T, Error> {
        let taken = self.take(Call::Get(id.to_owned()), |e| {
            matches!(e, Expectation::Get { id: expected, .. } if expected == id)
        });
        let Expectation::Get { reply, .. } = taken else {
            unreachable!("matcher only accepts get expectations")
        };
        reply
    }

    async fn create(&self, entity: &T) -> Result<T, Error> {
        let taken = self.take(Call::Create(entity.clone()), |e| {
            matches!(e, Expectation::Create { entity: expected, .. } if expected == entity)
        });
        let Expectation::Create { reply, .. } = taken else {
            unreachable!("matcher only accepts create expectations")
        };
        reply
    }

    async fn update(&self, entity: &T) -> Result<T, Error> {
        let taken = self.take(Call::Update(entity.clone()), |e| {
            matches!(e, Expectation::Update { entity: expected, .. } if expected == entity)
        });
        let Expectation::Update { reply, .. } = taken else {
            unreachable!("matcher only accepts update expectations")
        };
        reply
    }

    async fn delete(&self, id: &str) -> Result<(), Error> {
        let taken = self.take(Call::Delete(id.to_owned()), |e| {
            matches!(e, Expectation::Delete { id: expected, .. } if expected == id)
        });
        let Expectation::Delete { reply, .. } = taken else {
            unreachable!("matcher only accepts delete expectations")
        };
        reply
    }

    async fn list(&self) -> Result<Vec<T>, Error> {
        let taken = self.take(Call::List, |e| matches!(e, Expectation::List { .. }));
        let Expectation::List { reply } = taken else {
            unreachable!("matcher only accepts list expectations")
        };
        reply
    }
}

/// Implementation of [`Site24x7`] that stubs every endpoint with a
/// [`FakeEndpoint`].
#[derive(Default)]
pub struct FakeClient {
    pub website_monitors: FakeEndpoint<WebsiteMonitor>,
    pub ssl_monitors: FakeEndpoint<SslMonitor>,
    pub rest_api_monitors: FakeEndpoint<RestApiMonitor>,
    pub amazon_monitors: FakeEndpoint<AmazonMonitor>,
    pub location_profiles: FakeEndpoint<LocationProfile>,
    pub notification_profiles: FakeEndpoint<NotificationProfile>,
    pub threshold_profiles: FakeEndpoint<ThresholdProfile>,
    pub monitor_groups: FakeEndpoint<MonitorGroup>,
    pub user_groups: FakeEndpoint<UserGroup>,
    pub url_automations: FakeEndpoint<UrlAutomation>,
}

impl FakeClient {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Site24x7 for FakeClient {
    fn website_monitors(&self) -> &WebsiteMonitors {
        &self.website_monitors
    }

    fn ssl_monitors(&self) -> &SslMonitors {
        &self.ssl_monitors
    }

    fn rest_api_monitors(&self) -> &RestApiMonitors {
        &self.rest_api_monitors
    }

    fn amazon_monitors(&self) -> &AmazonMonitors {
        &self.amazon_monitors
    }

    fn location_profiles(&self) -> &LocationProfiles {
        &self.location_profiles
    }

    fn notification_profiles(&self) -> &NotificationProfiles {
        &self.notification_profiles
    }

    fn threshold_profiles(&self) -> &ThresholdProfiles {
        &self.threshold_profiles
    }

    fn monitor_groups(&self) -> &MonitorGroups {
        &self.monitor_groups
    }

    fn user_groups(&self) -> &UserGroups {
        &self.user_groups
    }

    fn url_automations(&self) -> &UrlAutomations {
        &self.url_automations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn replies_are_consumed_once_in_order() {
        let fake = FakeClient::new();
        fake.user_groups
            .on_delete("1", Ok(()))
            .on_delete("1", Err(Error::status(404, "not found")));

        assert!(fake.user_groups().delete("1").await.is_ok());
        let err = fake.user_groups().delete("1").await.expect_err("second reply");
        assert!(err.is_not_found());
        assert_eq!(
            fake.user_groups.calls(),
            vec![Call::Delete("1".into()), Call::Delete("1".into())]
        );
        fake.user_groups.assert_done();
    }

    #[tokio::test]
    #[should_panic(expected = "unexpected call")]
    async fn unscripted_call_panics() {
        let fake = FakeClient::new();
        let _ = fake.location_profiles().list().await;
    }
}
