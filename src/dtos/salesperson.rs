//! Salesperson data-transfer object

use crate::core::validation::{RuleSet, Validatable, validators};
use chrono::{DateTime, Utc};
use regex::Regex;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::sync::{LazyLock, OnceLock};

/// Youngest age, in years, a salesperson may have
pub const MINIMUM_AGE_YEARS: u32 = 18;

static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10,11}$").expect("salesperson phone pattern"));

/// A salesperson as received from a caller
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SalespersonDto {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub created_at: Option<DateTime<Utc>>,
    pub birth_date: Option<DateTime<Utc>>,
    pub hire_date: Option<DateTime<Utc>>,
    /// Commission as a percentage, 0 to 100
    pub commission_percent: Decimal,
    pub monthly_target: Decimal,
}

impl SalespersonDto {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
        address: impl Into<String>,
        created_at: DateTime<Utc>,
        birth_date: DateTime<Utc>,
        hire_date: DateTime<Utc>,
        commission_percent: Decimal,
        monthly_target: Decimal,
    ) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            email: email.into(),
            address: address.into(),
            created_at: Some(created_at),
            birth_date: Some(birth_date),
            hire_date: Some(hire_date),
            commission_percent,
            monthly_target,
        }
    }
}

impl Validatable for SalespersonDto {
    fn rules() -> &'static RuleSet<Self> {
        static RULES: OnceLock<RuleSet<SalespersonDto>> = OnceLock::new();
        RULES.get_or_init(salesperson_rules)
    }
}

fn salesperson_rules() -> RuleSet<SalespersonDto> {
    use messages::*;

    RuleSet::new("salesperson")
        .field("name", |s: &SalespersonDto| s.name.as_str())
        .must(validators::not_blank(), NAME_REQUIRED)
        .must(validators::max_chars(100), NAME_TOO_LONG)
        .field("phone", |s: &SalespersonDto| s.phone.as_str())
        .must(validators::not_blank(), PHONE_REQUIRED)
        .must(validators::matches(&PHONE_PATTERN), PHONE_DIGITS)
        .field("email", |s: &SalespersonDto| s.email.as_str())
        .must(validators::not_blank(), EMAIL_REQUIRED)
        .must(validators::email(), EMAIL_INVALID)
        .field("address", |s: &SalespersonDto| s.address.as_str())
        .must(validators::not_blank(), ADDRESS_REQUIRED)
        .must(validators::max_chars(200), ADDRESS_TOO_LONG)
        .field("created_at", |s: &SalespersonDto| &s.created_at)
        .must_at(validators::not_in_future(), CREATED_AT_IN_FUTURE)
        .field("birth_date", |s: &SalespersonDto| &s.birth_date)
        .must(validators::present::<DateTime<Utc>>(), BIRTH_DATE_REQUIRED)
        .must_at(
            validators::at_least_years_ago(MINIMUM_AGE_YEARS),
            UNDER_MINIMUM_AGE,
        )
        .field("hire_date", |s: &SalespersonDto| &s.hire_date)
        .must(validators::present::<DateTime<Utc>>(), HIRE_DATE_REQUIRED)
        .must_with(
            validators::on_or_after(|s: &SalespersonDto| &s.birth_date),
            HIRED_BEFORE_BIRTH,
        )
        .field("commission_percent", |s: &SalespersonDto| {
            &s.commission_percent
        })
        .must(
            validators::inclusive_between(Decimal::ZERO, Decimal::ONE_HUNDRED),
            COMMISSION_OUT_OF_RANGE,
        )
        .field("monthly_target", |s: &SalespersonDto| &s.monthly_target)
        .must(validators::greater_than(Decimal::ZERO), TARGET_NOT_POSITIVE)
        .build()
}

/// Failure messages reported by the salesperson rules
pub mod messages {
    use crate::core::validation::Localized;

    pub const NAME_REQUIRED: Localized = Localized::new("Name is required", "Nome é obrigatório");
    pub const NAME_TOO_LONG: Localized = Localized::new(
        "Name must have at most 100 characters",
        "Nome deve ter no máximo 100 caracteres",
    );

    pub const PHONE_REQUIRED: Localized =
        Localized::new("Phone is required", "Telefone é obrigatório");
    pub const PHONE_DIGITS: Localized = Localized::new(
        "Phone must contain 10 or 11 digits",
        "Telefone deve conter 10 ou 11 dígitos",
    );

    pub const EMAIL_REQUIRED: Localized = Localized::new("Email is required", "Email é obrigatório");
    pub const EMAIL_INVALID: Localized = Localized::new("Invalid email", "Email inválido");

    pub const ADDRESS_REQUIRED: Localized =
        Localized::new("Address is required", "Endereço é obrigatório");
    pub const ADDRESS_TOO_LONG: Localized = Localized::new(
        "Address must have at most 200 characters",
        "Endereço deve ter no máximo 200 caracteres",
    );

    pub const CREATED_AT_IN_FUTURE: Localized = Localized::new(
        "Creation date cannot be in the future",
        "Data de criação não pode ser futura",
    );

    pub const BIRTH_DATE_REQUIRED: Localized = Localized::new(
        "Birth date is required",
        "Data de nascimento é obrigatória",
    );
    pub const UNDER_MINIMUM_AGE: Localized = Localized::new(
        "The salesperson must be at least 18 years old",
        "O vendedor deve ter no mínimo 18 anos",
    );

    pub const HIRE_DATE_REQUIRED: Localized = Localized::new(
        "Hire date is required",
        "Data de contratação é obrigatória",
    );
    pub const HIRED_BEFORE_BIRTH: Localized = Localized::new(
        "The hire date must be after the birth date",
        "A data de contratação deve ser posterior à data de nascimento",
    );

    pub const COMMISSION_OUT_OF_RANGE: Localized = Localized::new(
        "The commission must be between 0% and 100%",
        "A comissão deve estar entre 0% e 100%",
    );
    pub const TARGET_NOT_POSITIVE: Localized = Localized::new(
        "The monthly target must be a positive value",
        "A meta mensal deve ser um valor positivo",
    );
}
