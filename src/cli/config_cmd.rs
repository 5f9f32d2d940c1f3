use std::fs;

use anyhow::{Context, Result, bail};
use colored::Colorize;

use crate::configmap::{ConfigMap, EditSession};
use crate::jsontext;
use crate::store::AppStore;

use super::args::{ConfigArgs, ConfigCommand};

pub(crate) fn handle(args: ConfigArgs, store: &mut AppStore) -> Result<()> {
    match args.command {
        ConfigCommand::List { search } => {
            let maps = match &search {
                Some(query) => store.configmaps.search(query),
                None => store.configmaps.configmaps().iter().collect(),
            };
            if maps.is_empty() {
                println!("No ConfigMaps match.");
                return Ok(());
            }
            println!("\nConfigMaps:\n");
            for map in maps {
                println!(
                    "  {:<20} {:<22} ns={:<12} {:<8} modified {} ({} versions)",
                    map.name.bold(),
                    map.deployment,
                    map.namespace,
                    map.size,
                    map.last_modified,
                    map.versions.len()
                );
            }
            Ok(())
        }
        ConfigCommand::Show { name, raw } => {
            let map = lookup(store, &name)?;
            println!(
                "\n{} ({}, namespace {}, {} versions, modified {})\n",
                map.name.bold(),
                map.deployment,
                map.namespace,
                map.versions.len(),
                map.last_modified
            );
            if raw {
                println!("{}", map.data);
            } else {
                println!("{}", jsontext::beautify_or_raw(&map.data));
            }
            Ok(())
        }
        ConfigCommand::Edit {
            name,
            file,
            data,
            editor,
            message,
        } => {
            let payload = match (data, file) {
                (Some(data), _) => data,
                (None, Some(path)) => fs::read_to_string(&path)
                    .with_context(|| format!("Failed reading payload from {}", path.display()))?,
                (None, None) => bail!("Provide the new payload with --data or --file"),
            };

            let map = lookup(store, &name)?;
            let mut session = EditSession::open(map);
            session.edit();
            session.set_buffer(payload);
            session.beautify()?;
            session.save(&mut store.configmaps, &editor, &message)?;

            println!(
                "{} Saved '{}' ({} versions)",
                "✅".green(),
                name,
                lookup(store, &name)?.versions.len()
            );
            Ok(())
        }
        ConfigCommand::History { name } => {
            let map = lookup(store, &name)?;
            println!("\n{} - {} versions\n", map.name.bold(), map.versions.len());
            for version in &map.versions {
                println!(
                    "  v{}  {}  {}  {}",
                    version.id,
                    version.timestamp,
                    version.editor.dimmed(),
                    version.changes
                );
            }
            Ok(())
        }
        ConfigCommand::Restore { name, version } => {
            let map = lookup(store, &name)?;
            let map_id = map.id;
            let mut session = EditSession::open(map);
            session.restore(&mut store.configmaps, version)?;

            let restored = store
                .configmaps
                .get(map_id)
                .map(|map| map.data.clone())
                .unwrap_or_default();
            println!(
                "{} Restored '{}' to version {}\n",
                "✅".green(),
                name,
                version
            );
            println!("{}", jsontext::beautify_or_raw(&restored));
            Ok(())
        }
    }
}

fn lookup<'a>(store: &'a AppStore, name: &str) -> Result<&'a ConfigMap> {
    match store.configmaps.get_by_name(name) {
        Some(map) => Ok(map),
        None => bail!("Unknown ConfigMap '{name}' (try `opsdrill config list`)"),
    }
}
