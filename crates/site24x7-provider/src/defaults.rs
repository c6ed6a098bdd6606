// ── Default resolution ──
//
// Monitors must always reference a location, notification and threshold
// profile plus at least one user group. When the attribute tree leaves
// one out, these lookups list the candidates and pick one. An empty
// candidate list is `NoDefault`; a failing list call is passed through.

use tracing::debug;

use site24x7_api::Site24x7;
use site24x7_api::models::{
    LocationProfile, MonitorType, NotificationProfile, ThresholdProfile, UserGroup,
};

use crate::error::ProviderError;

/// The location profile named `name_hint`, else the first one.
pub async fn default_location_profile(
    client: &dyn Site24x7,
    name_hint: &str,
) -> Result<LocationProfile, ProviderError> {
    let profiles = client.location_profiles().list().await?;

    let matched = if name_hint.is_empty() {
        None
    } else {
        profiles.iter().position(|p| p.profile_name == name_hint)
    };
    if !name_hint.is_empty() && matched.is_none() {
        debug!(name_hint, "no location profile with that name, using the first");
    }

    let profile = match matched {
        Some(index) => profiles.into_iter().nth(index),
        None => profiles.into_iter().next(),
    };
    let profile = profile.ok_or_else(|| ProviderError::NoDefault {
        kind: "location profile",
        reason: "no location profiles are configured".into(),
    })?;

    debug!(profile_id = %profile.profile_id, "resolved default location profile");
    Ok(profile)
}

/// The first notification profile.
pub async fn default_notification_profile(
    client: &dyn Site24x7,
) -> Result<NotificationProfile, ProviderError> {
    let profile = client
        .notification_profiles()
        .list()
        .await?
        .into_iter()
        .next()
        .ok_or_else(|| ProviderError::NoDefault {
            kind: "notification profile",
            reason: "no notification profiles are configured".into(),
        })?;

    debug!(profile_id = %profile.profile_id, "resolved default notification profile");
    Ok(profile)
}

/// The first threshold profile whose type matches `monitor_type`.
pub async fn default_threshold_profile(
    client: &dyn Site24x7,
    monitor_type: MonitorType,
) -> Result<ThresholdProfile, ProviderError> {
    let profile = client
        .threshold_profiles()
        .list()
        .await?
        .into_iter()
        .find(|p| p.monitor_type == monitor_type.as_ref())
        .ok_or_else(|| ProviderError::NoDefault {
            kind: "threshold profile",
            reason: format!("no threshold profile of type {monitor_type} exists"),
        })?;

    debug!(profile_id = %profile.profile_id, %monitor_type, "resolved default threshold profile");
    Ok(profile)
}

/// The first user group.
pub async fn default_user_group(client: &dyn Site24x7) -> Result<UserGroup, ProviderError> {
    let group = client
        .user_groups()
        .list()
        .await?
        .into_iter()
        .next()
        .ok_or_else(|| ProviderError::NoDefault {
            kind: "user group",
            reason: "no user groups are configured".into(),
        })?;

    debug!(user_group_id = %group.user_group_id, "resolved default user group");
    Ok(group)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use site24x7_api::Error;
    use site24x7_api::fake::FakeClient;

    fn location(id: &str, name: &str) -> LocationProfile {
        LocationProfile {
            profile_id: id.into(),
            profile_name: name.into(),
            ..LocationProfile::default()
        }
    }

    fn threshold(id: &str, ty: &str) -> ThresholdProfile {
        ThresholdProfile {
            profile_id: id.into(),
            monitor_type: ty.into(),
            ..ThresholdProfile::default()
        }
    }

    #[tokio::test]
    async fn location_prefers_name_match() {
        let fake = FakeClient::new();
        fake.location_profiles
            .on_list(Ok(vec![location("1", "Europe"), location("2", "Asia")]));

        let profile = default_location_profile(&fake, "Asia").await.unwrap();
        assert_eq!(profile.profile_id, "2");
    }

    #[tokio::test]
    async fn location_falls_back_to_first() {
        let fake = FakeClient::new();
        fake.location_profiles
            .on_list(Ok(vec![location("1", "Europe"), location("2", "Asia")]))
            .on_list(Ok(vec![location("1", "Europe"), location("2", "Asia")]));

        let unnamed = default_location_profile(&fake, "").await.unwrap();
        let unmatched = default_location_profile(&fake, "Mars").await.unwrap();
        assert_eq!(unnamed.profile_id, "1");
        assert_eq!(unmatched.profile_id, "1");
    }

    #[tokio::test]
    async fn empty_list_has_no_default() {
        let fake = FakeClient::new();
        fake.notification_profiles.on_list(Ok(Vec::new()));

        let err = default_notification_profile(&fake).await.unwrap_err();
        assert!(matches!(
            err,
            ProviderError::NoDefault {
                kind: "notification profile",
                ..
            }
        ));
    }

    #[tokio::test]
    async fn threshold_matches_monitor_type() {
        let fake = FakeClient::new();
        fake.threshold_profiles.on_list(Ok(vec![
            threshold("1", "URL"),
            threshold("2", "SSL_CERT"),
            threshold("3", "SSL_CERT"),
        ]));

        let profile = default_threshold_profile(&fake, MonitorType::SslCert)
            .await
            .unwrap();
        assert_eq!(profile.profile_id, "2");
    }

    #[tokio::test]
    async fn threshold_without_matching_type_has_no_default() {
        let fake = FakeClient::new();
        fake.threshold_profiles
            .on_list(Ok(vec![threshold("1", "URL")]));

        let err = default_threshold_profile(&fake, MonitorType::RestApi)
            .await
            .unwrap_err();
        assert!(matches!(err, ProviderError::NoDefault { .. }));
    }

    #[tokio::test]
    async fn lookup_failure_passes_through() {
        let fake = FakeClient::new();
        fake.user_groups.on_list(Err(Error::status(500, "error")));

        let err = default_user_group(&fake).await.unwrap_err();
        assert_eq!(err.api().and_then(Error::status_code), Some(500));
    }
}
