//! Test fixtures
//!
//! Java sources and shortcuts for running the pipeline over them.

use staticfier::config::StaticfierConfig;
use staticfier::pipeline::{process_source, FileOutcome};

/// Run the pipeline over `source` with the default configuration
pub fn run(source: &str) -> FileOutcome {
    run_with(source, &StaticfierConfig::default())
}

pub fn run_with(source: &str, config: &StaticfierConfig) -> FileOutcome {
    process_source(source, "Fixture.java", config)
        .unwrap_or_else(|err| panic!("pipeline failed: {err}\n--- source ---\n{source}"))
}

/// Rewritten text of `source`
pub fn rewrite(source: &str) -> String {
    run(source).output
}

/// A class named `name` with the given member declarations, one per line
pub fn fixture_class(name: &str, members: &[&str]) -> String {
    let body: String = members.iter().map(|m| format!("    {m}\n")).collect();
    format!("class {name} {{\n{body}}}\n")
}

/// The example from the recipe's documentation
pub fn fixture_documented_example() -> &'static str {
    r#"class A {
    private void foo() {
        System.out.println("No instance data used!");
    }

    private void bar() {
        System.out.println("Here's my hashcode! " + this.hashCode());
    }
}
"#
}

/// A small realistic class mixing convertible and non-convertible methods
pub fn fixture_inventory() -> &'static str {
    r#"package shop;

import java.util.ArrayList;
import java.util.List;

public class Inventory {
    private static final int MAX_ITEMS = 100;

    private final List<String> items = new ArrayList<>();
    private int version;

    public boolean add(String item) {
        if (!isValid(item) || items.size() >= MAX_ITEMS) {
            return false;
        }
        items.add(normalize(item));
        version++;
        return true;
    }

    private boolean isValid(String item) {
        return item != null && !item.isBlank();
    }

    private final String normalize(String item) {
        return item.trim().toLowerCase();
    }

    private int nextVersion() {
        return version + 1;
    }

    private int capacityLeft() {
        return MAX_ITEMS - items.size();
    }
}
"#
}
