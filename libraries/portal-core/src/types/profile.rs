/// User-profile service shapes
use super::null_as_empty;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Fields returned by the email and single-user lookups
pub const BASIC_PROFILE_FIELDS: &[&str] = &["wid", "email", "first_name", "last_name"];

/// Fields returned by the multi-user lookup
pub const EXTENDED_PROFILE_FIELDS: &[&str] = &[
    "wid",
    "email",
    "first_name",
    "last_name",
    "unit_name",
    "residence_city",
    "residence_country",
    "department_name",
];

/// Body of a multi-fetch query against the profile service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileQuery {
    /// Filter applied to every match
    pub conditions: Value,
    /// Profile fields to return
    pub source_fields: Vec<String>,
    /// Ids or emails to look up
    pub values: Vec<Value>,
}

impl ProfileQuery {
    /// Look up `values` within `root_org`, returning `fields`
    pub fn new(root_org: &str, fields: &[&str], values: Vec<Value>) -> Self {
        Self {
            conditions: json!({ "root_org": root_org }),
            source_fields: fields.iter().map(|f| (*f).to_string()).collect(),
            values,
        }
    }
}

/// Roles of a user as the profile service reports them
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserRoles {
    /// Roles every user of the tenant has
    #[serde(default, deserialize_with = "null_as_empty")]
    pub default_roles: Vec<Value>,
    /// Roles assigned to the user
    #[serde(default, deserialize_with = "null_as_empty")]
    pub user_roles: Vec<Value>,
}

impl UserRoles {
    /// Default roles followed by the user's own
    pub fn combined(self) -> Vec<Value> {
        self.default_roles
            .into_iter()
            .chain(self.user_roles)
            .collect()
    }
}

/// Summary returned by the user-details route
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDetails {
    /// Groups; always empty
    pub group: Vec<Value>,
    /// Default and assigned roles
    pub roles: Vec<Value>,
    /// Whether the current terms are accepted
    pub tnc_status: bool,
}

/// Public body of the email lookup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmailLookup {
    /// Email to look up
    pub email: Value,
}

/// Public body of the multi-user lookup; `wid` is one id or a list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WidLookup {
    /// User id or list of ids
    #[serde(default)]
    pub wid: Value,
}

impl WidLookup {
    /// The requested ids as a list
    pub fn values(&self) -> Vec<Value> {
        match &self.wid {
            Value::Array(values) => values.clone(),
            other => vec![other.clone()],
        }
    }
}

/// Query string of the user autocomplete route
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutocompleteParams {
    /// Restrict matches to a dealer
    #[serde(default)]
    pub dealer_code: Option<String>,
    /// Comma-separated profile fields to return
    #[serde(default)]
    pub source_fields: Option<String>,
}

impl AutocompleteParams {
    /// Query pairs for the profile service; values are JSON-encoded
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let filters = match &self.dealer_code {
            Some(code) => json!({ "dealer_code": code }),
            None => json!({}),
        };
        let mut query = vec![("filters", filters.to_string())];
        if let Some(fields) = self.source_fields.as_deref().filter(|f| !f.is_empty()) {
            let fields: Vec<&str> = fields.split(',').collect();
            query.push(("source_fields", json!(fields).to_string()));
        }
        query
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_shape() {
        let query = ProfileQuery::new("r1", BASIC_PROFILE_FIELDS, vec![json!("a@b.c")]);
        assert_eq!(
            serde_json::to_value(query).unwrap(),
            json!({
                "conditions": { "root_org": "r1" },
                "source_fields": ["wid", "email", "first_name", "last_name"],
                "values": ["a@b.c"]
            })
        );
    }

    #[test]
    fn wid_lookup_accepts_one_or_many() {
        let one: WidLookup = serde_json::from_value(json!({ "wid": "u1" })).unwrap();
        assert_eq!(one.values(), vec![json!("u1")]);

        let many: WidLookup = serde_json::from_value(json!({ "wid": ["u1", "u2"] })).unwrap();
        assert_eq!(many.values().len(), 2);
    }

    #[test]
    fn autocomplete_query_encodes_json() {
        let params = AutocompleteParams {
            dealer_code: Some("D1".to_string()),
            source_fields: Some("wid,email".to_string()),
        };
        assert_eq!(
            params.to_query(),
            vec![
                ("filters", r#"{"dealer_code":"D1"}"#.to_string()),
                ("source_fields", r#"["wid","email"]"#.to_string()),
            ]
        );
        assert_eq!(
            AutocompleteParams::default().to_query(),
            vec![("filters", "{}".to_string())]
        );
    }

    #[test]
    fn roles_combine_default_first() {
        let roles: UserRoles = serde_json::from_value(json!({
            "default_roles": ["learner"],
            "user_roles": ["admin"]
        }))
        .unwrap();
        assert_eq!(roles.combined(), vec![json!("learner"), json!("admin")]);
    }
}
