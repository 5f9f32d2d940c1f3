use anyhow::{Result, bail};
use colored::Colorize;

use crate::rules::{ActivityFilter, Rule};
use crate::store::AppStore;

use super::args::{RulesArgs, RulesCommand};

pub(crate) fn handle(args: RulesArgs, store: &mut AppStore) -> Result<()> {
    match args.command {
        RulesCommand::List {
            search,
            active,
            inactive,
        } => {
            if active && inactive {
                bail!("--active and --inactive are mutually exclusive");
            }
            let filter = if active {
                ActivityFilter::Active
            } else if inactive {
                ActivityFilter::Inactive
            } else {
                ActivityFilter::All
            };

            let query = search.unwrap_or_default();
            let matches = store.rules.search(&query, filter);
            println!(
                "\nRules: {} active, {} inactive ({} shown)\n",
                store.rules.active_count(),
                store.rules.inactive_count(),
                matches.len()
            );
            for rule in matches {
                print_rule_line(rule);
            }
            Ok(())
        }
        RulesCommand::Show { id } => {
            let Some(rule) = store.rules.get(id) else {
                bail!("Unknown rule id {id} (try `opsdrill rules list`)");
            };
            println!("\n{} [{}]\n", rule.name.bold(), activity_label(rule));
            println!("  {}", rule.description);
            println!("  tags: {}", rule.tags.join(", "));
            println!(
                "  created {}, modified {}",
                rule.created_date, rule.last_modified
            );
            println!(
                "  geometry: {} - {}",
                rule.geometry.kind(),
                rule.geometry.summary()
            );
            println!("\n{}", serde_json::to_string_pretty(&rule.geometry)?);
            Ok(())
        }
        RulesCommand::Toggle { id } => {
            let now_active = store.rules.toggle(id)?;
            let state = if now_active {
                "active".green()
            } else {
                "inactive".red()
            };
            println!("{} Rule {} is now {}", "✅".green(), id, state);
            Ok(())
        }
    }
}

fn print_rule_line(rule: &Rule) {
    println!(
        "  [{}] {:<32} {:<10} {:<12} tags: {}",
        rule.id,
        rule.name,
        activity_label(rule),
        rule.geometry.kind(),
        rule.tags.join(", ")
    );
}

fn activity_label(rule: &Rule) -> colored::ColoredString {
    if rule.is_active {
        "active".green()
    } else {
        "inactive".red()
    }
}
