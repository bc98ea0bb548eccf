// ============================================================================
// USE FORM HOOK - Field values, validation errors and touched tracking
// ============================================================================

use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Clone, PartialEq, Debug)]
pub enum Rule {
    Required,
    Email,
    MinLen(usize),
    Numeric,
}

/// First violated rule wins; None means the value is acceptable.
pub fn validate_value(label: &str, value: &str, rules: &[Rule]) -> Option<String> {
    for rule in rules {
        match rule {
            Rule::Required => {
                if value.trim().is_empty() {
                    return Some(format!("{} is required", label));
                }
            }
            Rule::Email => {
                if !value.trim().is_empty() && !looks_like_email(value) {
                    return Some(format!("{} must be a valid email address", label));
                }
            }
            Rule::MinLen(min) => {
                if !value.is_empty() && value.chars().count() < *min {
                    return Some(format!("{} must be at least {} characters", label, min));
                }
            }
            Rule::Numeric => {
                if !value.trim().is_empty() && value.trim().parse::<f64>().is_err() {
                    return Some(format!("{} must be a number", label));
                }
            }
        }
    }
    None
}

fn looks_like_email(value: &str) -> bool {
    let value = value.trim();
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
        }
        None => false,
    }
}

/// One field's declaration: name, human label for messages, rules.
#[derive(Clone, PartialEq, Debug)]
pub struct Field {
    pub name: &'static str,
    pub label: &'static str,
    pub rules: Vec<Rule>,
}

impl Field {
    pub fn new(name: &'static str, label: &'static str, rules: Vec<Rule>) -> Self {
        Self { name, label, rules }
    }
}

#[derive(Clone, PartialEq, Debug, Default)]
pub struct FormState {
    pub values: HashMap<String, String>,
    pub errors: HashMap<String, String>,
    pub touched: HashSet<String>,
}

impl FormState {
    /// Update one value, revalidating it only once the field was touched —
    /// nobody wants "is required" while still typing the first character.
    fn set_value(&self, field: &Field, value: String) -> Self {
        let mut next = self.clone();
        next.values.insert(field.name.to_string(), value.clone());
        if next.touched.contains(field.name) {
            next.apply_validation(field, &value);
        }
        next
    }

    /// Bulk prefill (edit forms). One transition, no validation: the values
    /// come from a record the backend already accepted.
    fn set_values(&self, values: &[(&str, String)]) -> Self {
        let mut next = self.clone();
        for (name, value) in values {
            next.values.insert(name.to_string(), value.clone());
        }
        next
    }

    fn blur(&self, field: &Field) -> Self {
        let mut next = self.clone();
        next.touched.insert(field.name.to_string());
        let value = next.values.get(field.name).cloned().unwrap_or_default();
        next.apply_validation(field, &value);
        next
    }

    /// Validate everything, marking all fields touched. Returns the state
    /// plus whether the form may be submitted.
    fn validate_all(&self, fields: &[Field]) -> (Self, bool) {
        let mut next = self.clone();
        let mut valid = true;
        for field in fields {
            next.touched.insert(field.name.to_string());
            let value = next.values.get(field.name).cloned().unwrap_or_default();
            next.apply_validation(field, &value);
            if next.errors.contains_key(field.name) {
                valid = false;
            }
        }
        (next, valid)
    }

    fn apply_validation(&mut self, field: &Field, value: &str) {
        match validate_value(field.label, value, &field.rules) {
            Some(message) => self.errors.insert(field.name.to_string(), message),
            None => self.errors.remove(field.name),
        };
    }

    fn reset(fields: &[Field], initial: &HashMap<String, String>) -> Self {
        let mut values = HashMap::new();
        for field in fields {
            values.insert(
                field.name.to_string(),
                initial.get(field.name).cloned().unwrap_or_default(),
            );
        }
        Self {
            values,
            errors: HashMap::new(),
            touched: HashSet::new(),
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct UseFormHandle {
    state: UseStateHandle<FormState>,
    fields: Rc<Vec<Field>>,
}

impl UseFormHandle {
    pub fn value(&self, name: &str) -> String {
        self.state.values.get(name).cloned().unwrap_or_default()
    }

    pub fn error(&self, name: &str) -> Option<String> {
        self.state.errors.get(name).cloned()
    }

    pub fn set_value(&self, name: &str, value: String) {
        if let Some(field) = self.field(name) {
            self.state.set(self.state.set_value(&field, value));
        }
    }

    /// Set several values in one state transition. Successive `set_value`
    /// calls within one event would each start from the same snapshot and
    /// overwrite each other; prefills go through here instead.
    pub fn set_values(&self, values: &[(&str, String)]) {
        self.state.set(self.state.set_values(values));
    }

    /// Ready-made oninput handler for text inputs and selects.
    pub fn oninput(&self, name: &'static str) -> Callback<InputEvent> {
        let handle = self.clone();
        Callback::from(move |e: InputEvent| {
            let value = e.target_unchecked_into::<HtmlInputElement>().value();
            handle.set_value(name, value);
        })
    }

    pub fn onblur(&self, name: &'static str) -> Callback<FocusEvent> {
        let handle = self.clone();
        Callback::from(move |_| {
            if let Some(field) = handle.field(name) {
                handle.state.set(handle.state.blur(&field));
            }
        })
    }

    /// Validate everything; true means submit may proceed.
    pub fn validate_all(&self) -> bool {
        let (next, valid) = self.state.validate_all(&self.fields);
        self.state.set(next);
        valid
    }

    pub fn reset(&self) {
        self.state
            .set(FormState::reset(&self.fields, &HashMap::new()));
    }

    fn field(&self, name: &str) -> Option<Field> {
        self.fields.iter().find(|f| f.name == name).cloned()
    }
}

#[hook]
pub fn use_form(fields: Vec<Field>) -> UseFormHandle {
    let fields = use_memo((), move |_| fields);

    let state = {
        let fields = fields.clone();
        use_state(move || FormState::reset(&fields, &HashMap::new()))
    };

    UseFormHandle { state, fields }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn email_field() -> Field {
        Field::new("email", "Email", vec![Rule::Required, Rule::Email])
    }

    fn password_field() -> Field {
        Field::new("password", "Password", vec![Rule::Required, Rule::MinLen(8)])
    }

    #[test]
    fn untouched_fields_do_not_show_errors_while_typing() {
        let field = email_field();
        let state = FormState::reset(&[field.clone()], &HashMap::new()).set_value(&field, "a".into());
        assert!(state.errors.is_empty());
    }

    #[test]
    fn blur_marks_touched_and_validates() {
        let field = email_field();
        let state = FormState::reset(&[field.clone()], &HashMap::new())
            .set_value(&field, "not-an-email".into())
            .blur(&field);
        assert_eq!(
            state.errors.get("email").map(String::as_str),
            Some("Email must be a valid email address")
        );

        let fixed = state.set_value(&field, "ana@example.com".into());
        assert!(fixed.errors.get("email").is_none());
    }

    #[test]
    fn validate_all_reports_every_broken_field() {
        let fields = vec![email_field(), password_field()];
        let state = FormState::reset(&fields, &HashMap::new());
        let (validated, valid) = state.validate_all(&fields);
        assert!(!valid);
        assert_eq!(validated.errors.len(), 2);
        assert_eq!(
            validated.errors.get("password").map(String::as_str),
            Some("Password is required")
        );
    }

    #[test]
    fn valid_form_passes_validate_all() {
        let fields = vec![email_field(), password_field()];
        let mut state = FormState::reset(&fields, &HashMap::new());
        state.values.insert("email".into(), "ana@example.com".into());
        state.values.insert("password".into(), "longenough".into());
        let (validated, valid) = state.validate_all(&fields);
        assert!(valid);
        assert!(validated.errors.is_empty());
    }

    #[test]
    fn bulk_prefill_lands_every_value_in_one_transition() {
        let fields = vec![email_field(), password_field()];
        let state = FormState::reset(&fields, &HashMap::new()).set_values(&[
            ("email", "ana@example.com".to_string()),
            ("password", "longenough".to_string()),
        ]);
        assert_eq!(state.values.get("email").map(String::as_str), Some("ana@example.com"));
        assert_eq!(state.values.get("password").map(String::as_str), Some("longenough"));
        assert!(state.errors.is_empty());
    }

    #[test]
    fn rule_checks_cover_min_len_and_numeric() {
        assert!(validate_value("Credits", "abc", &[Rule::Numeric]).is_some());
        assert!(validate_value("Credits", "3", &[Rule::Numeric]).is_none());
        assert!(validate_value("Password", "short", &[Rule::MinLen(8)]).is_some());
        assert!(validate_value("Password", "", &[Rule::MinLen(8)]).is_none());
    }
}
