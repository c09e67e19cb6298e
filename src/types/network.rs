// src/types/network.rs
//! Contacts and the relationship edges between them

use anyhow::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ContactRecord")]
pub struct Contact {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

impl Contact {
    pub fn new(id: &str, name: &str) -> Result<Self> {
        if id.trim().is_empty() {
            anyhow::bail!("Contact id cannot be empty");
        }

        Ok(Self {
            id: id.to_string(),
            name: name.to_string(),
            company: None,
            role: None,
        })
    }

    pub fn with_company(mut self, company: &str) -> Self {
        self.company = Some(company.to_string());
        self
    }

    pub fn with_role(mut self, role: &str) -> Self {
        self.role = Some(role.to_string());
        self
    }

    /// Stand-in for an id that no known contact list could resolve.
    pub fn unresolved(id: &str) -> Self {
        Self {
            id: id.to_string(),
            name: id.to_string(),
            company: None,
            role: None,
        }
    }
}

// Wire shape, checked by `Contact::new` on the way in.
#[derive(Deserialize)]
struct ContactRecord {
    id: String,
    name: String,
    #[serde(default)]
    company: Option<String>,
    #[serde(default)]
    role: Option<String>,
}

impl TryFrom<ContactRecord> for Contact {
    type Error = anyhow::Error;

    fn try_from(record: ContactRecord) -> Result<Self> {
        let mut contact = Contact::new(&record.id, &record.name)?;
        if let Some(company) = record.company {
            contact = contact.with_company(&company);
        }
        if let Some(role) = record.role {
            contact = contact.with_role(&role);
        }
        Ok(contact)
    }
}

/// Undirected relationship between two contacts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ConnectionRecord")]
pub struct ConnectionEdge {
    pub contact_a: String,
    pub contact_b: String,
    #[serde(default)]
    pub relationship_type: Option<String>,
}

impl ConnectionEdge {
    pub fn new(contact_a: &str, contact_b: &str) -> Result<Self> {
        if contact_a.trim().is_empty() || contact_b.trim().is_empty() {
            anyhow::bail!(
                "Connection endpoints cannot be empty (got '{}' and '{}')",
                contact_a,
                contact_b
            );
        }

        Ok(Self {
            contact_a: contact_a.to_string(),
            contact_b: contact_b.to_string(),
            relationship_type: None,
        })
    }

    pub fn with_relationship_type(mut self, relationship_type: &str) -> Self {
        self.relationship_type = Some(relationship_type.to_string());
        self
    }
}

#[derive(Deserialize)]
struct ConnectionRecord {
    contact_a: String,
    contact_b: String,
    #[serde(default)]
    relationship_type: Option<String>,
}

impl TryFrom<ConnectionRecord> for ConnectionEdge {
    type Error = anyhow::Error;

    fn try_from(record: ConnectionRecord) -> Result<Self> {
        let edge = ConnectionEdge::new(&record.contact_a, &record.contact_b)?;
        Ok(match record.relationship_type {
            Some(relationship_type) => edge.with_relationship_type(&relationship_type),
            None => edge,
        })
    }
}

/// Shortest chain from one of the user's contacts to a target.
///
/// `path` starts at a direct contact and ends with the target itself, so a
/// fully resolved path has exactly `degree` entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionPath {
    pub target: Contact,
    pub path: Vec<Contact>,
    pub degree: usize,
    pub path_description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_builder() {
        let contact = Contact::new("c-1", "Dana")
            .unwrap()
            .with_company("Initech")
            .with_role("Staff Engineer");
        assert_eq!(contact.company.as_deref(), Some("Initech"));
        assert_eq!(contact.role.as_deref(), Some("Staff Engineer"));
        assert!(Contact::new("  ", "Nobody").is_err());
    }

    #[test]
    fn test_contact_deserialization_validates_id() {
        let contact: Contact =
            serde_json::from_str(r#"{"id": "c-1", "name": "Dana", "company": "Initech"}"#)
                .unwrap();
        assert_eq!(contact, Contact::new("c-1", "Dana").unwrap().with_company("Initech"));

        let empty = serde_json::from_str::<Contact>(r#"{"id": "", "name": "Dana"}"#);
        assert!(empty.is_err());
    }

    #[test]
    fn test_connection_deserialization() {
        let edge: ConnectionEdge = serde_json::from_str(
            r#"{"contact_a": "a", "contact_b": "b", "relationship_type": "colleague"}"#,
        )
        .unwrap();
        assert_eq!(
            edge,
            ConnectionEdge::new("a", "b")
                .unwrap()
                .with_relationship_type("colleague")
        );

        let dangling =
            serde_json::from_str::<ConnectionEdge>(r#"{"contact_a": "a", "contact_b": " "}"#);
        assert!(dangling.is_err());
    }
}
