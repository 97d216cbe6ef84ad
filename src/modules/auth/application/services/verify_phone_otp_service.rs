use async_trait::async_trait;
use chrono::Utc;
use tracing::{info, warn};

use crate::auth::application::domain::{
    entities::{User, PHONE_VERIFICATION_PURPOSE},
    otp_policy::OtpPolicy,
};
use crate::auth::application::ports::{
    incoming::use_cases::{
        BasicProfileView, RegistrationError, VerifyPhoneOtpCommand, VerifyPhoneOtpUseCase,
    },
    outgoing::{OtpRepository, UserQuery, UserRepository},
};

/// Step 4: proves phone ownership with a previously issued code.
///
/// Checks run in a fixed order: a missing row is `OtpInvalidOrExpired`, a row
/// past its expiry is `OtpExpired`, a consumed row is `OtpAlreadyUsed`. The
/// owning user must resolve before the code is consumed.
#[derive(Debug, Clone)]
pub struct VerifyPhoneOtpService<Q, R, O>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
    O: OtpRepository + Send + Sync,
{
    query: Q,
    repository: R,
    otp_repository: O,
    policy: OtpPolicy,
}

impl<Q, R, O> VerifyPhoneOtpService<Q, R, O>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
    O: OtpRepository + Send + Sync,
{
    pub fn new(query: Q, repository: R, otp_repository: O, policy: OtpPolicy) -> Self {
        Self {
            query,
            repository,
            otp_repository,
            policy,
        }
    }

    async fn verify_with_master_code(
        &self,
        command: &VerifyPhoneOtpCommand,
    ) -> Result<User, RegistrationError> {
        warn!(phone = %command.phone_number(), "OTP master code used");

        self.query
            .find_by_phone(command.phone_number())
            .await?
            .ok_or(RegistrationError::UserNotFound)
    }

    async fn verify_with_stored_code(
        &self,
        command: &VerifyPhoneOtpCommand,
    ) -> Result<User, RegistrationError> {
        let otp = self
            .otp_repository
            .find_latest(
                command.phone_number(),
                PHONE_VERIFICATION_PURPOSE,
                command.otp_code(),
            )
            .await?
            .ok_or(RegistrationError::OtpInvalidOrExpired)?;

        if otp.is_expired_at(Utc::now()) {
            return Err(RegistrationError::OtpExpired);
        }

        if otp.is_used {
            return Err(RegistrationError::OtpAlreadyUsed);
        }

        let owner = match otp.user_id {
            Some(user_id) => self.query.find_by_id(user_id).await?,
            None => None,
        };
        let user = match owner {
            Some(user) => user,
            None => self
                .query
                .find_by_phone(command.phone_number())
                .await?
                .ok_or(RegistrationError::UserNotFound)?,
        };

        self.otp_repository.mark_used(otp.id).await?;

        Ok(user)
    }
}

#[async_trait]
impl<Q, R, O> VerifyPhoneOtpUseCase for VerifyPhoneOtpService<Q, R, O>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
    O: OtpRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: VerifyPhoneOtpCommand,
    ) -> Result<BasicProfileView, RegistrationError> {
        let user = if self.policy.is_master_code(command.otp_code()) {
            self.verify_with_master_code(&command).await?
        } else {
            self.verify_with_stored_code(&command).await?
        };

        let verified = self
            .repository
            .mark_phone_verified(user.id, Utc::now())
            .await?;

        info!(user_id = %verified.id, phone = %command.phone_number(), "Phone verified");

        Ok(verified.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::{OtpVerification, UserId, UserRole};
    use crate::auth::application::ports::incoming::use_cases::ErrorKind;
    use crate::auth::application::services::test_fakes::{
        user, user_with_phone, InMemoryOtps, InMemoryUsers,
    };
    use chrono::{DateTime, Duration};

    const PHONE: &str = "+1555";

    fn otp(
        id: i64,
        code: &str,
        created_at: DateTime<Utc>,
        ttl: Duration,
        used: bool,
    ) -> OtpVerification {
        OtpVerification {
            id,
            user_id: Some(UserId::from(1)),
            phone_number: PHONE.to_string(),
            otp_code: code.to_string(),
            purpose: PHONE_VERIFICATION_PURPOSE.to_string(),
            expires_at: created_at + ttl,
            is_used: used,
            created_at,
        }
    }

    fn command(code: &str) -> VerifyPhoneOtpCommand {
        VerifyPhoneOtpCommand::new(PHONE.to_string(), code.to_string()).unwrap()
    }

    fn service(
        users: &InMemoryUsers,
        otps: &InMemoryOtps,
        policy: OtpPolicy,
    ) -> VerifyPhoneOtpService<InMemoryUsers, InMemoryUsers, InMemoryOtps> {
        VerifyPhoneOtpService::new(users.clone(), users.clone(), otps.clone(), policy)
    }

    #[tokio::test]
    async fn valid_code_verifies_phone_and_consumes_code() {
        let users = InMemoryUsers::with(vec![user_with_phone(1, PHONE)]);
        let otps = InMemoryOtps::default();
        otps.insert(otp(1, "424242", Utc::now(), Duration::minutes(5), false));

        let view = service(&users, &otps, OtpPolicy::default())
            .execute(command("424242"))
            .await
            .unwrap();

        assert!(view.is_phone_verified);
        let stored = users.get(1).unwrap();
        assert!(stored.is_phone_verified);
        assert!(stored.phone_verified_at.is_some());
        assert!(otps.all()[0].is_used);
    }

    #[tokio::test]
    async fn second_use_of_same_code_is_already_used() {
        let users = InMemoryUsers::with(vec![user_with_phone(1, PHONE)]);
        let otps = InMemoryOtps::default();
        otps.insert(otp(1, "424242", Utc::now(), Duration::minutes(5), false));
        let service = service(&users, &otps, OtpPolicy::default());

        service.execute(command("424242")).await.unwrap();
        let err = service.execute(command("424242")).await.unwrap_err();

        assert!(matches!(err, RegistrationError::OtpAlreadyUsed));
        assert_eq!(err.kind(), ErrorKind::AlreadyUsed);
    }

    #[tokio::test]
    async fn unknown_code_is_invalid_or_expired() {
        let users = InMemoryUsers::with(vec![user_with_phone(1, PHONE)]);
        let otps = InMemoryOtps::default();
        otps.insert(otp(1, "424242", Utc::now(), Duration::minutes(5), false));

        let err = service(&users, &otps, OtpPolicy::default())
            .execute(command("000000"))
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::InvalidOrExpired);
        assert!(!users.get(1).unwrap().is_phone_verified);
    }

    #[tokio::test]
    async fn expired_code_is_expired_and_not_consumed() {
        let users = InMemoryUsers::with(vec![user_with_phone(1, PHONE)]);
        let otps = InMemoryOtps::default();
        let created = Utc::now() - Duration::minutes(10);
        otps.insert(otp(1, "424242", created, Duration::minutes(5), false));

        let err = service(&users, &otps, OtpPolicy::default())
            .execute(command("424242"))
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Expired);
        assert!(!otps.all()[0].is_used);
    }

    #[tokio::test]
    async fn expiry_is_reported_before_used() {
        let users = InMemoryUsers::with(vec![user_with_phone(1, PHONE)]);
        let otps = InMemoryOtps::default();
        let created = Utc::now() - Duration::minutes(10);
        otps.insert(otp(1, "424242", created, Duration::minutes(5), true));

        let err = service(&users, &otps, OtpPolicy::default())
            .execute(command("424242"))
            .await
            .unwrap_err();

        assert!(matches!(err, RegistrationError::OtpExpired));
    }

    #[tokio::test]
    async fn unused_row_wins_over_newer_used_row() {
        let users = InMemoryUsers::with(vec![user_with_phone(1, PHONE)]);
        let otps = InMemoryOtps::default();
        let now = Utc::now();
        otps.insert(otp(
            1,
            "424242",
            now - Duration::minutes(2),
            Duration::minutes(5),
            false,
        ));
        otps.insert(otp(
            2,
            "424242",
            now - Duration::minutes(1),
            Duration::minutes(5),
            true,
        ));

        let result = service(&users, &otps, OtpPolicy::default())
            .execute(command("424242"))
            .await;

        assert!(result.is_ok(), "got {:?}", result);
        assert!(otps.all().iter().all(|o| o.is_used));
    }

    #[tokio::test]
    async fn code_without_user_id_resolves_owner_by_phone() {
        let users = InMemoryUsers::with(vec![user_with_phone(1, PHONE)]);
        let otps = InMemoryOtps::default();
        let mut row = otp(1, "424242", Utc::now(), Duration::minutes(5), false);
        row.user_id = None;
        otps.insert(row);

        let view = service(&users, &otps, OtpPolicy::default())
            .execute(command("424242"))
            .await
            .unwrap();

        assert_eq!(view.user_id, UserId::from(1));
    }

    #[tokio::test]
    async fn code_owner_is_verified_even_when_stored_phone_differs() {
        let users = InMemoryUsers::with(vec![
            user(1, "owner@example.com", UserRole::JobSeeker),
            user_with_phone(2, PHONE),
        ]);
        let otps = InMemoryOtps::default();
        otps.insert(otp(1, "424242", Utc::now(), Duration::minutes(5), false));

        let view = service(&users, &otps, OtpPolicy::default())
            .execute(command("424242"))
            .await
            .unwrap();

        assert_eq!(view.user_id, UserId::from(1));
        let owner = users.get(1).unwrap();
        assert!(owner.is_phone_verified);
        assert_eq!(owner.phone_number, None);
        assert!(!users.get(2).unwrap().is_phone_verified);
    }

    #[tokio::test]
    async fn unresolvable_owner_is_not_found_and_code_survives() {
        let users = InMemoryUsers::default();
        let otps = InMemoryOtps::default();
        otps.insert(otp(1, "424242", Utc::now(), Duration::minutes(5), false));

        let err = service(&users, &otps, OtpPolicy::default())
            .execute(command("424242"))
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert!(!otps.all()[0].is_used);
    }

    #[tokio::test]
    async fn master_code_verifies_without_stored_rows_when_enabled() {
        let users = InMemoryUsers::with(vec![user_with_phone(1, PHONE)]);
        let otps = InMemoryOtps::default();
        let policy = OtpPolicy::default().with_master_code("123456");

        let view = service(&users, &otps, policy)
            .execute(command("123456"))
            .await
            .unwrap();

        assert!(view.is_phone_verified);
        assert!(otps.all().is_empty());
    }

    #[tokio::test]
    async fn master_code_is_an_ordinary_code_when_disabled() {
        let users = InMemoryUsers::with(vec![user_with_phone(1, PHONE)]);
        let otps = InMemoryOtps::default();

        let err = service(&users, &otps, OtpPolicy::default())
            .execute(command("123456"))
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::InvalidOrExpired);
        assert!(!users.get(1).unwrap().is_phone_verified);
    }

    #[tokio::test]
    async fn master_code_for_unknown_phone_is_not_found() {
        let users = InMemoryUsers::default();
        let otps = InMemoryOtps::default();
        let policy = OtpPolicy::default().with_master_code("123456");

        let err = service(&users, &otps, policy)
            .execute(command("123456"))
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::NotFound);
    }
}
