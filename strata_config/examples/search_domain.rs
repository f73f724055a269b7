//! Example component resolving a search-domain configuration under each
//! compliance framework and printing the resolved trees.

use std::io::{self, Write};

use serde_json::{Value, json};
use strata_config::{
    ComplianceFramework, ComponentModel, ResolutionContext, SchemaNode, StrataError, StrataResult,
};

/// A managed search domain: capacity, price class, logging, and an optional
/// dedicated master tier expanded by the derive hook.
struct SearchDomain {
    schema: SchemaNode,
}

impl SearchDomain {
    fn new() -> Self {
        Self {
            schema: SchemaNode::object([
                (
                    "domainName",
                    SchemaNode::string().max_length(28).resource_name(),
                ),
                (
                    "capacity",
                    SchemaNode::object([
                        ("min", SchemaNode::number().min(1u64).max(100u64).required()),
                        ("max", SchemaNode::number().min(1u64).max(100u64).required()),
                    ])
                    .required(),
                ),
                (
                    "priceClass",
                    SchemaNode::enumeration([
                        "PriceClass_100",
                        "PriceClass_200",
                        "PriceClass_All",
                    ]),
                ),
                (
                    "logging",
                    SchemaNode::object([
                        ("enabled", SchemaNode::boolean().required()),
                        (
                            "retentionDays",
                            SchemaNode::number()
                                .min(1u64)
                                .max(3653u64)
                                .clamped()
                                .default_value(json!(365)),
                        ),
                    ])
                    .required(),
                ),
                (
                    "dedicatedMaster",
                    SchemaNode::object([
                        ("enabled", SchemaNode::boolean().default_value(json!(false))),
                        ("instanceType", SchemaNode::string()),
                        ("count", SchemaNode::number().min(2u64).max(5u64)),
                    ])
                    .default_value(json!({})),
                ),
            ]),
        }
    }
}

impl ComponentModel for SearchDomain {
    fn name(&self) -> &str {
        "search-domain"
    }

    fn schema(&self) -> &SchemaNode {
        &self.schema
    }

    fn fallback(&self) -> Value {
        json!({
            "priceClass": "PriceClass_100",
            "logging": {"enabled": false},
        })
    }

    fn compliance_defaults(&self, framework: ComplianceFramework) -> Value {
        match framework {
            ComplianceFramework::Commercial => json!({}),
            ComplianceFramework::FedrampModerate => json!({
                "logging": {"enabled": true},
            }),
            ComplianceFramework::FedrampHigh => json!({
                "priceClass": "PriceClass_All",
                "logging": {"enabled": true},
                "capacity": {"min": 2, "max": 10},
            }),
        }
    }

    fn derive(&self, tree: &mut Value, context: &ResolutionContext) -> StrataResult<()> {
        let map = tree.as_object_mut().ok_or_else(|| {
            StrataError::derivation("search-domain", "merged tree is not an object")
        })?;
        if !map.contains_key("domainName") {
            map.insert("domainName".to_owned(), json!(context.qualified_name()));
        }
        if let Some(master) = map.get_mut("dedicatedMaster").and_then(Value::as_object_mut)
            && master.get("enabled").and_then(Value::as_bool) == Some(true)
        {
            master
                .entry("instanceType")
                .or_insert_with(|| json!("m5.large.search"));
            master.entry("count").or_insert_with(|| json!(3));
        }
        Ok(())
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let component = SearchDomain::new();
    let manifest = json!({
        "domainName": "My Product Search!",
        "capacity": {"min": 1, "max": 4},
        "dedicatedMaster": {"enabled": true},
    });

    let mut stdout = io::stdout().lock();
    for framework in ComplianceFramework::ALL {
        let context = ResolutionContext::new(framework, "catalog", "search");
        let resolved = component.resolve(&context, manifest.clone())?;
        writeln!(stdout, "{framework}:")?;
        writeln!(stdout, "{}", serde_json::to_string_pretty(resolved.tree())?)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use anyhow::{Result, ensure};
    use serde_json::json;

    use super::*;

    #[test]
    fn example_manifest_resolves_under_every_framework() -> Result<()> {
        let component = SearchDomain::new();
        for framework in ComplianceFramework::ALL {
            let context = ResolutionContext::new(framework, "catalog", "search");
            let resolved = component.resolve(
                &context,
                json!({"capacity": {"min": 1, "max": 4}}),
            )?;
            ensure!(
                resolved.tree().get("domainName") == Some(&json!("catalog-search")),
                "derived name missing under {framework}"
            );
        }
        Ok(())
    }
}
