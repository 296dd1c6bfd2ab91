//! Record grouping logic.
//!
//! This module partitions a filtered record subset by category label and
//! by owner. Both operations are pure and deterministic: groups appear in
//! first-seen order of their key, and every input record lands in exactly
//! one group.

use std::collections::HashMap;

use crate::models::{CategoryGroup, OwnerGroup, ProductionRecord};

/// Groups records by their category label.
///
/// Groups are ordered by the first occurrence of each label in the input
/// sequence, and members keep their input order within a group. The union
/// of all member lists is exactly the input, with no record omitted or
/// duplicated.
///
/// # Examples
///
/// ```
/// use report_engine::models::{Owner, ProductionRecord};
/// use report_engine::report::group_by_category;
/// use chrono::NaiveDateTime;
///
/// let make = |id: &str, category: &str| ProductionRecord {
///     id: id.to_string(),
///     owner: Owner::new("emp_001", "Maria Santos"),
///     category: category.to_string(),
///     started_at: NaiveDateTime::parse_from_str("2024-03-01 08:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     completed_at: NaiveDateTime::parse_from_str("2024-03-05 16:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
/// };
///
/// let groups = group_by_category(&[make("a", "Sewing"), make("b", "Cutting"), make("c", "Sewing")]);
/// assert_eq!(groups.len(), 2);
/// assert_eq!(groups[0].label, "Sewing");
/// assert_eq!(groups[0].count, 2);
/// assert_eq!(groups[1].label, "Cutting");
/// assert_eq!(groups[1].count, 1);
/// ```
pub fn group_by_category(records: &[ProductionRecord]) -> Vec<CategoryGroup> {
    let mut groups: Vec<CategoryGroup> = Vec::new();
    let mut index_by_label: HashMap<String, usize> = HashMap::new();

    for record in records {
        match index_by_label.get(&record.category) {
            Some(&index) => {
                groups[index].members.push(record.clone());
                groups[index].count += 1;
            }
            None => {
                index_by_label.insert(record.category.clone(), groups.len());
                groups.push(CategoryGroup {
                    label: record.category.clone(),
                    count: 1,
                    members: vec![record.clone()],
                });
            }
        }
    }

    groups
}

/// Groups records by their owner id.
///
/// Groups are ordered by the first occurrence of each owner in the input
/// sequence. The display name is taken from the first member encountered
/// for that owner. Partition property as for [`group_by_category`].
pub fn group_by_owner(records: &[ProductionRecord]) -> Vec<OwnerGroup> {
    let mut groups: Vec<OwnerGroup> = Vec::new();
    let mut index_by_owner: HashMap<String, usize> = HashMap::new();

    for record in records {
        match index_by_owner.get(&record.owner.id) {
            Some(&index) => {
                groups[index].members.push(record.clone());
                groups[index].count += 1;
            }
            None => {
                index_by_owner.insert(record.owner.id.clone(), groups.len());
                groups.push(OwnerGroup {
                    owner_id: record.owner.id.clone(),
                    owner_name: record.owner.name.clone(),
                    count: 1,
                    members: vec![record.clone()],
                });
            }
        }
    }

    groups
}
