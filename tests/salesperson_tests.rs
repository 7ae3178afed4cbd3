//! Integration tests for salesperson validation
//!
//! These tests verify that:
//! - A fully populated salesperson passes
//! - Age, hire date, commission and target boundaries behave as declared
//! - Failures are aggregated into one message

use chrono::{Duration, Months, TimeZone};
use trade_dtos::dtos::salesperson::messages;
use trade_dtos::prelude::*;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
}

fn ctx() -> ValidationContext {
    ValidationContext::at(now())
}

fn years_before_now(years: u32) -> DateTime<Utc> {
    now().checked_sub_months(Months::new(years * 12)).unwrap()
}

fn valid_salesperson() -> SalespersonDto {
    SalespersonDto::new(
        "Ana Souza",
        "11987654321",
        "ana.souza@example.com",
        "Avenida Paulista 1000, Sao Paulo",
        now() - Duration::days(30),
        years_before_now(30),
        years_before_now(5),
        Decimal::new(75, 1),
        Decimal::new(20000, 0),
    )
}

fn failure_message(dto: &SalespersonDto) -> String {
    dto.validate_with(&ctx())
        .expect_err("salesperson should be rejected")
        .to_string()
}

mod valid_records {
    use super::*;

    #[test]
    fn test_valid_salesperson_passes() {
        assert!(valid_salesperson().validate_with(&ctx()).is_ok());
    }

    #[test]
    fn test_missing_created_at_passes() {
        let mut salesperson = valid_salesperson();
        salesperson.created_at = None;
        assert!(salesperson.validate_with(&ctx()).is_ok());
    }

    #[test]
    fn test_address_may_use_any_characters() {
        let mut salesperson = valid_salesperson();
        salesperson.address = "Rua #7 - Bloco B / Apto 12".to_string();
        assert!(salesperson.validate_with(&ctx()).is_ok());
    }

    #[test]
    fn test_valid_salesperson_passes_against_wall_clock() {
        let mut salesperson = valid_salesperson();
        salesperson.created_at = Some(Utc::now());
        assert!(salesperson.validate().is_ok());
    }
}

mod required_fields {
    use super::*;

    #[test]
    fn test_missing_name() {
        let mut salesperson = valid_salesperson();
        salesperson.name = String::new();
        assert_eq!(failure_message(&salesperson), messages::NAME_REQUIRED.en);
    }

    #[test]
    fn test_missing_birth_date() {
        let mut salesperson = valid_salesperson();
        salesperson.birth_date = None;
        assert_eq!(failure_message(&salesperson), messages::BIRTH_DATE_REQUIRED.en);
    }

    #[test]
    fn test_missing_hire_date() {
        let mut salesperson = valid_salesperson();
        salesperson.hire_date = None;
        assert_eq!(failure_message(&salesperson), messages::HIRE_DATE_REQUIRED.en);
    }

    #[test]
    fn test_missing_phone() {
        let mut salesperson = valid_salesperson();
        salesperson.phone = String::new();
        let message = failure_message(&salesperson);
        assert!(message.contains(messages::PHONE_REQUIRED.en));
        assert!(message.contains(messages::PHONE_DIGITS.en));
    }
}

mod field_rules {
    use super::*;

    #[test]
    fn test_phone_outside_ten_to_eleven_digits() {
        for phone in ["119876543", "119876543210", "11 98765432"] {
            let mut salesperson = valid_salesperson();
            salesperson.phone = phone.to_string();
            assert_eq!(
                failure_message(&salesperson),
                messages::PHONE_DIGITS.en,
                "phone {phone}"
            );
        }
    }

    #[test]
    fn test_invalid_email() {
        let mut salesperson = valid_salesperson();
        salesperson.email = "ana.souza".to_string();
        assert_eq!(failure_message(&salesperson), messages::EMAIL_INVALID.en);
    }

    #[test]
    fn test_address_too_long() {
        let mut salesperson = valid_salesperson();
        salesperson.address = "x".repeat(201);
        assert_eq!(failure_message(&salesperson), messages::ADDRESS_TOO_LONG.en);
    }

    #[test]
    fn test_created_in_future() {
        let mut salesperson = valid_salesperson();
        salesperson.created_at = Some(now() + Duration::days(1));
        assert_eq!(
            failure_message(&salesperson),
            messages::CREATED_AT_IN_FUTURE.en
        );
    }
}

mod age {
    use super::*;

    #[test]
    fn test_exactly_eighteen_passes() {
        let mut salesperson = valid_salesperson();
        salesperson.birth_date = Some(years_before_now(18));
        salesperson.hire_date = Some(now());
        assert!(salesperson.validate_with(&ctx()).is_ok());
    }

    #[test]
    fn test_one_day_short_of_eighteen_fails() {
        let mut salesperson = valid_salesperson();
        salesperson.birth_date = Some(years_before_now(18) + Duration::days(1));
        salesperson.hire_date = Some(now());
        assert_eq!(failure_message(&salesperson), messages::UNDER_MINIMUM_AGE.en);
    }

    #[test]
    fn test_minor_fails() {
        let mut salesperson = valid_salesperson();
        salesperson.birth_date = Some(years_before_now(16));
        salesperson.hire_date = Some(now());
        assert_eq!(failure_message(&salesperson), messages::UNDER_MINIMUM_AGE.en);
    }
}

mod hire_date {
    use super::*;

    #[test]
    fn test_hired_on_birth_date_passes() {
        let mut salesperson = valid_salesperson();
        salesperson.hire_date = salesperson.birth_date;
        assert!(salesperson.validate_with(&ctx()).is_ok());
    }

    #[test]
    fn test_hired_before_birth_fails() {
        let mut salesperson = valid_salesperson();
        salesperson.hire_date = Some(years_before_now(31));
        assert_eq!(failure_message(&salesperson), messages::HIRED_BEFORE_BIRTH.en);
    }

    #[test]
    fn test_hire_date_without_birth_date_reports_only_missing_birth() {
        let mut salesperson = valid_salesperson();
        salesperson.birth_date = None;
        salesperson.hire_date = Some(years_before_now(50));
        assert_eq!(failure_message(&salesperson), messages::BIRTH_DATE_REQUIRED.en);
    }
}

mod amounts {
    use super::*;

    #[test]
    fn test_commission_inclusive_bounds_pass() {
        for commission in [Decimal::ZERO, Decimal::ONE_HUNDRED] {
            let mut salesperson = valid_salesperson();
            salesperson.commission_percent = commission;
            assert!(salesperson.validate_with(&ctx()).is_ok(), "{commission}");
        }
    }

    #[test]
    fn test_commission_just_outside_bounds_fails() {
        for commission in [Decimal::new(-1, 2), Decimal::new(10001, 2)] {
            let mut salesperson = valid_salesperson();
            salesperson.commission_percent = commission;
            assert_eq!(
                failure_message(&salesperson),
                messages::COMMISSION_OUT_OF_RANGE.en,
                "{commission}"
            );
        }
    }

    #[test]
    fn test_zero_target_fails() {
        let mut salesperson = valid_salesperson();
        salesperson.monthly_target = Decimal::ZERO;
        assert_eq!(failure_message(&salesperson), messages::TARGET_NOT_POSITIVE.en);
    }

    #[test]
    fn test_negative_target_fails() {
        let mut salesperson = valid_salesperson();
        salesperson.monthly_target = Decimal::new(-500, 0);
        assert_eq!(failure_message(&salesperson), messages::TARGET_NOT_POSITIVE.en);
    }

    #[test]
    fn test_smallest_positive_target_passes() {
        let mut salesperson = valid_salesperson();
        salesperson.monthly_target = Decimal::new(1, 2);
        assert!(salesperson.validate_with(&ctx()).is_ok());
    }
}

mod aggregation {
    use super::*;

    #[test]
    fn test_multiple_failures_joined_with_and() {
        let mut salesperson = valid_salesperson();
        salesperson.name = String::new();
        salesperson.email = "bad".to_string();
        salesperson.commission_percent = Decimal::new(150, 0);

        assert_eq!(
            failure_message(&salesperson),
            format!(
                "{} and {} and {}",
                messages::NAME_REQUIRED.en,
                messages::EMAIL_INVALID.en,
                messages::COMMISSION_OUT_OF_RANGE.en
            )
        );
    }

    #[test]
    fn test_custom_connective_from_settings() {
        let settings = ValidationSettings::from_yaml_str("locale: pt-BR\nconnective: \"; \"")
            .expect("settings should parse");
        let ctx = ValidationContext::from_settings(&settings).with_now(now());

        let mut salesperson = valid_salesperson();
        salesperson.name = String::new();
        salesperson.monthly_target = Decimal::ZERO;

        let err = salesperson.validate_with(&ctx).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Nome é obrigatório; A meta mensal deve ser um valor positivo"
        );
    }
}
