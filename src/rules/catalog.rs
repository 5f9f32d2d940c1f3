use anyhow::{Result, bail};
use chrono::Utc;

use super::types::{Geometry, Rule};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActivityFilter {
    #[default]
    All,
    Active,
    Inactive,
}

impl ActivityFilter {
    fn matches(self, rule: &Rule) -> bool {
        match self {
            ActivityFilter::All => true,
            ActivityFilter::Active => rule.is_active,
            ActivityFilter::Inactive => !rule.is_active,
        }
    }
}

/// The geo-rule collection; toggling and lookups go through here.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn get(&self, id: u32) -> Option<&Rule> {
        self.rules.iter().find(|rule| rule.id == id)
    }

    pub fn active_count(&self) -> usize {
        self.rules.iter().filter(|rule| rule.is_active).count()
    }

    pub fn inactive_count(&self) -> usize {
        self.rules.len() - self.active_count()
    }

    /// Flip a rule's active flag and stamp the modification date. Returns
    /// the new state.
    pub fn toggle(&mut self, id: u32) -> Result<bool> {
        let Some(rule) = self.rules.iter_mut().find(|rule| rule.id == id) else {
            bail!("Unknown rule id {id}");
        };
        rule.is_active = !rule.is_active;
        rule.last_modified = Utc::now().format("%Y-%m-%d").to_string();
        Ok(rule.is_active)
    }

    /// Case-insensitive search over name, description, and tags, narrowed
    /// by the activity filter.
    pub fn search(&self, query: &str, filter: ActivityFilter) -> Vec<&Rule> {
        let query = query.to_lowercase();
        self.rules
            .iter()
            .filter(|rule| filter.matches(rule))
            .filter(|rule| {
                query.is_empty()
                    || rule.name.to_lowercase().contains(&query)
                    || rule.description.to_lowercase().contains(&query)
                    || rule
                        .tags
                        .iter()
                        .any(|tag| tag.to_lowercase().contains(&query))
            })
            .collect()
    }

    pub fn seeded() -> Self {
        let rule = |id: u32,
                    name: &str,
                    is_active: bool,
                    description: &str,
                    created_date: &str,
                    last_modified: &str,
                    tags: &[&str],
                    geometry: Geometry| {
            Rule {
                id,
                name: name.to_string(),
                is_active,
                description: description.to_string(),
                created_date: created_date.to_string(),
                last_modified: last_modified.to_string(),
                tags: tags.iter().map(|tag| tag.to_string()).collect(),
                geometry,
            }
        };

        Self::new(vec![
            rule(
                1,
                "Downtown Delivery Zone",
                true,
                "Primary delivery area covering downtown district",
                "2024-01-15",
                "2024-02-10",
                &["delivery", "zone-A", "priority"],
                Geometry::Polygon(vec![vec![
                    [-73.9857, 40.7580],
                    [-73.9857, 40.7480],
                    [-73.9757, 40.7480],
                    [-73.9757, 40.7580],
                    [-73.9857, 40.7580],
                ]]),
            ),
            rule(
                2,
                "Airport Service Route",
                true,
                "Service route connecting airport to city center",
                "2024-01-20",
                "2024-02-14",
                &["route", "airport", "express"],
                Geometry::LineString(vec![
                    [-73.9857, 40.7580],
                    [-73.9800, 40.7550],
                    [-73.9750, 40.7520],
                    [-73.9700, 40.7500],
                    [-73.9650, 40.7480],
                ]),
            ),
            rule(
                3,
                "Warehouse Location",
                false,
                "Primary warehouse and distribution center",
                "2024-02-01",
                "2024-02-01",
                &["warehouse", "storage"],
                Geometry::Point([-73.9700, 40.7500]),
            ),
            rule(
                4,
                "Restricted Area - Construction",
                true,
                "Temporary restriction due to construction work",
                "2024-02-05",
                "2024-02-12",
                &["restricted", "temporary", "construction"],
                Geometry::Polygon(vec![vec![
                    [-73.9800, 40.7560],
                    [-73.9800, 40.7540],
                    [-73.9780, 40.7540],
                    [-73.9780, 40.7560],
                    [-73.9800, 40.7560],
                ]]),
            ),
            rule(
                5,
                "North Side Coverage",
                true,
                "Extended coverage area for north side neighborhoods",
                "2024-01-10",
                "2024-02-15",
                &["coverage", "zone-B", "extended"],
                Geometry::Polygon(vec![vec![
                    [-73.9900, 40.7650],
                    [-73.9900, 40.7550],
                    [-73.9800, 40.7550],
                    [-73.9800, 40.7650],
                    [-73.9900, 40.7650],
                ]]),
            ),
            rule(
                6,
                "Express Lane Highway",
                false,
                "High-speed delivery route along highway",
                "2024-01-25",
                "2024-02-08",
                &["route", "highway", "express"],
                Geometry::LineString(vec![
                    [-73.9900, 40.7600],
                    [-73.9850, 40.7580],
                    [-73.9800, 40.7560],
                    [-73.9750, 40.7540],
                ]),
            ),
            rule(
                7,
                "Pickup Point - Station A",
                true,
                "Main pickup point at central station",
                "2024-02-10",
                "2024-02-14",
                &["pickup", "station"],
                Geometry::Point([-73.9850, 40.7580]),
            ),
            rule(
                8,
                "South District Zone",
                false,
                "Service area for southern district",
                "2024-01-18",
                "2024-01-30",
                &["zone-C", "coverage"],
                Geometry::Polygon(vec![vec![
                    [-73.9850, 40.7500],
                    [-73.9850, 40.7420],
                    [-73.9750, 40.7420],
                    [-73.9750, 40.7500],
                    [-73.9850, 40.7500],
                ]]),
            ),
        ])
    }
}
