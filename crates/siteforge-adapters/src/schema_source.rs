//! Schema introspection adapters.
//!
//! Only a fixture-backed source ships today. A live database source would
//! implement the same `SchemaSource` port and map driver failures to
//! `ApplicationError::Upstream`.

use std::collections::HashMap;

use tracing::debug;

use siteforge_core::{
    application::{
        ApplicationError,
        ports::{ConnectionDescriptor, SchemaSource},
    },
    domain::{RawColumn, RawDatabaseSchema, RawTable},
    error::SiteforgeResult,
};

/// Schema source backed by named in-memory fixtures.
///
/// The connection descriptor's target selects the fixture; an unknown target
/// fails the same way an unreachable database would.
#[derive(Debug, Clone, Default)]
pub struct FixtureSchemaSource {
    fixtures: HashMap<String, RawDatabaseSchema>,
}

impl FixtureSchemaSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// A source preloaded with the demo `blog` fixture.
    pub fn with_builtin() -> Self {
        let mut source = Self::new();
        source.add_fixture("blog", blog_fixture());
        source
    }

    pub fn add_fixture(&mut self, name: impl Into<String>, schema: RawDatabaseSchema) {
        self.fixtures.insert(name.into(), schema);
    }
}

impl SchemaSource for FixtureSchemaSource {
    fn introspect(&self, conn: &ConnectionDescriptor) -> SiteforgeResult<RawDatabaseSchema> {
        debug!(target = %conn.target, "Introspecting fixture schema");
        self.fixtures.get(&conn.target).cloned().ok_or_else(|| {
            ApplicationError::Upstream {
                reason: format!("no schema available for '{}'", conn.target),
            }
            .into()
        })
    }
}

fn blog_fixture() -> RawDatabaseSchema {
    RawDatabaseSchema {
        tables: vec![
            RawTable {
                name: "User".into(),
                columns: vec![
                    column("id", "serial", false, true),
                    column("email", "varchar(255)", false, true),
                    column("display_name", "text", true, false),
                    column("created_at", "timestamp", false, false),
                ],
            },
            RawTable {
                name: "Post".into(),
                columns: vec![
                    column("id", "serial", false, true),
                    column("title", "varchar(255)", false, false),
                    column("body", "text", true, false),
                    column("published", "boolean", false, false),
                    column("metadata", "jsonb", true, false),
                ],
            },
        ],
    }
}

fn column(name: &str, data_type: &str, nullable: bool, unique: bool) -> RawColumn {
    RawColumn {
        name: name.into(),
        data_type: data_type.into(),
        nullable,
        unique,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_blog_fixture_resolves() {
        let source = FixtureSchemaSource::with_builtin();
        let schema = source
            .introspect(&ConnectionDescriptor::new("blog"))
            .unwrap();
        assert_eq!(schema.tables.len(), 2);
        assert_eq!(schema.tables[0].name, "User");
    }

    #[test]
    fn unknown_target_is_an_upstream_failure() {
        let source = FixtureSchemaSource::with_builtin();
        let err = source
            .introspect(&ConnectionDescriptor::new("warehouse"))
            .unwrap_err();
        assert!(err.to_string().contains("warehouse"));
    }
}
