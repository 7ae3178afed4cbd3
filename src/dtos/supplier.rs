//! Supplier data-transfer object

use crate::core::validation::{RuleSet, Validatable, validators};
use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::{LazyLock, OnceLock};

static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z\s]+$").expect("supplier name pattern"));
static TAX_ID_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{14}$").expect("supplier tax id pattern"));
static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10,11}$").expect("supplier phone pattern"));
static ADDRESS_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9\s,]+$").expect("supplier address pattern"));

/// A supplier as received from a caller
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SupplierDto {
    pub name: String,
    /// 14-digit company tax id
    pub tax_id: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub created_at: Option<DateTime<Utc>>,
}

impl SupplierDto {
    pub fn new(
        name: impl Into<String>,
        tax_id: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
        address: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            name: name.into(),
            tax_id: tax_id.into(),
            phone: phone.into(),
            email: email.into(),
            address: address.into(),
            created_at: Some(created_at),
        }
    }
}

impl Validatable for SupplierDto {
    fn rules() -> &'static RuleSet<Self> {
        static RULES: OnceLock<RuleSet<SupplierDto>> = OnceLock::new();
        RULES.get_or_init(supplier_rules)
    }
}

fn supplier_rules() -> RuleSet<SupplierDto> {
    use messages::*;

    RuleSet::new("supplier")
        .field("name", |s: &SupplierDto| s.name.as_str())
        .must(validators::not_blank(), NAME_REQUIRED)
        .must(validators::max_chars(100), NAME_TOO_LONG)
        .must(validators::matches(&NAME_PATTERN), NAME_LETTERS_ONLY)
        .field("tax_id", |s: &SupplierDto| s.tax_id.as_str())
        .must(validators::not_blank(), TAX_ID_REQUIRED)
        .must(validators::exact_chars(validators::TAX_ID_LENGTH), TAX_ID_WRONG_LENGTH)
        .must(validators::matches(&TAX_ID_PATTERN), TAX_ID_DIGITS_ONLY)
        .field("phone", |s: &SupplierDto| s.phone.as_str())
        .must(validators::not_blank(), PHONE_REQUIRED)
        .must(validators::chars_between(10, 11), PHONE_LENGTH)
        .must(validators::matches(&PHONE_PATTERN), PHONE_DIGITS_ONLY)
        .field("email", |s: &SupplierDto| s.email.as_str())
        .must(validators::not_blank(), EMAIL_REQUIRED)
        .must(validators::max_chars(100), EMAIL_TOO_LONG)
        .must(validators::email(), EMAIL_INVALID)
        .field("address", |s: &SupplierDto| s.address.as_str())
        .must(validators::not_blank(), ADDRESS_REQUIRED)
        .must(validators::max_chars(100), ADDRESS_TOO_LONG)
        .must(validators::matches(&ADDRESS_PATTERN), ADDRESS_CHARACTERS)
        .field("created_at", |s: &SupplierDto| &s.created_at)
        .must(validators::present::<DateTime<Utc>>(), CREATED_AT_REQUIRED)
        .must_at(validators::not_in_future(), CREATED_AT_IN_FUTURE)
        .rule("tax_id", TAX_ID_INVALID, |s: &SupplierDto| {
            validators::is_well_formed_tax_id(&s.tax_id)
        })
}

/// Failure messages reported by the supplier rules
pub mod messages {
    use crate::core::validation::Localized;

    pub const NAME_REQUIRED: Localized = Localized::new(
        "The supplier name is required.",
        "O nome do fornecedor é obrigatório.",
    );
    pub const NAME_TOO_LONG: Localized = Localized::new(
        "The name may have at most 100 characters.",
        "O nome pode ter no máximo 100 caracteres.",
    );
    pub const NAME_LETTERS_ONLY: Localized = Localized::new(
        "The name must contain only letters and spaces.",
        "O nome deve conter apenas letras e espaços.",
    );

    pub const TAX_ID_REQUIRED: Localized =
        Localized::new("The tax id is required.", "O CNPJ é obrigatório.");
    pub const TAX_ID_WRONG_LENGTH: Localized = Localized::new(
        "The tax id must have exactly 14 characters.",
        "O CNPJ deve conter exatamente 14 caracteres.",
    );
    pub const TAX_ID_DIGITS_ONLY: Localized = Localized::new(
        "The tax id must contain only digits.",
        "O CNPJ deve conter apenas números.",
    );
    pub const TAX_ID_INVALID: Localized =
        Localized::new("The tax id is invalid.", "O CNPJ informado é inválido.");

    pub const PHONE_REQUIRED: Localized =
        Localized::new("The phone is required.", "O telefone é obrigatório.");
    pub const PHONE_LENGTH: Localized = Localized::new(
        "The phone must have between 10 and 11 characters.",
        "O telefone deve ter entre 10 e 11 caracteres.",
    );
    pub const PHONE_DIGITS_ONLY: Localized = Localized::new(
        "The phone must contain only digits.",
        "O telefone deve conter apenas números.",
    );

    pub const EMAIL_REQUIRED: Localized =
        Localized::new("The email is required.", "O e-mail é obrigatório.");
    pub const EMAIL_TOO_LONG: Localized = Localized::new(
        "The email may have at most 100 characters.",
        "O e-mail pode ter no máximo 100 caracteres.",
    );
    pub const EMAIL_INVALID: Localized =
        Localized::new("The email must be valid.", "O e-mail deve ser válido.");

    pub const ADDRESS_REQUIRED: Localized =
        Localized::new("The address is required.", "O endereço é obrigatório.");
    pub const ADDRESS_TOO_LONG: Localized = Localized::new(
        "The address may have at most 100 characters.",
        "O endereço pode ter no máximo 100 caracteres.",
    );
    pub const ADDRESS_CHARACTERS: Localized = Localized::new(
        "The address must contain only letters, digits, commas and spaces.",
        "O endereço deve conter apenas letras, números, vírgulas e espaços.",
    );

    pub const CREATED_AT_REQUIRED: Localized = Localized::new(
        "The creation date is required.",
        "A data de criação é obrigatória.",
    );
    pub const CREATED_AT_IN_FUTURE: Localized = Localized::new(
        "The creation date cannot be in the future.",
        "A data de criação não pode ser futura.",
    );
}
