use crate::{
    config::IdPolicy,
    error::{GradebookError, Result},
    model::Entity,
};

/// CRUD contract for one entity kind. Lookups scan in insertion order and
/// return the first match.
pub trait Repository<T: Entity> {
    fn list(&self) -> Vec<T>;

    fn get(&self, id: i32) -> Option<T>;

    /// Fails only when no id is left to assign.
    fn create(&mut self, draft: T::Draft) -> Result<T>;

    /// Removes every record with the given id and returns how many went.
    fn delete(&mut self, id: i32) -> usize;
}

/// Ordered sequence of records of one kind.
#[derive(Debug, Clone)]
pub struct Table<T: Entity> {
    rows: Vec<T>,
    // Wider than the id type so a seeded `i32::MAX` does not overflow
    next_id: i64,
    policy: IdPolicy,
}

impl<T: Entity> Table<T> {
    pub fn new(policy: IdPolicy) -> Self {
        Self::with_rows(Vec::new(), policy)
    }

    /// Builds a table from existing rows; the counter starts after the
    /// largest id present.
    pub fn with_rows(rows: Vec<T>, policy: IdPolicy) -> Self {
        let next_id = rows.iter().map(|row| i64::from(row.id())).max().unwrap_or(0) + 1;
        Self {
            rows,
            next_id,
            policy,
        }
    }

    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    pub(crate) fn len(&self) -> usize {
        self.rows.len()
    }

    /// Removes all rows matching `predicate`, preserving the order of the rest.
    pub fn remove_where<P>(&mut self, mut predicate: P) -> usize
    where
        P: FnMut(&T) -> bool,
    {
        let before = self.rows.len();
        self.rows.retain(|row| !predicate(row));
        before - self.rows.len()
    }

    fn assign_id(&mut self) -> Result<i32> {
        let candidate = match self.policy {
            IdPolicy::Sequential => self.next_id,
            IdPolicy::Length => self.rows.len() as i64 + 1,
        };
        let id = i32::try_from(candidate).map_err(|_| {
            GradebookError::Storage(format!("no {} ids left to assign", T::KIND))
        })?;
        self.next_id = self.next_id.max(candidate) + 1;
        Ok(id)
    }
}

impl<T: Entity> Repository<T> for Table<T> {
    fn list(&self) -> Vec<T> {
        self.rows.clone()
    }

    fn get(&self, id: i32) -> Option<T> {
        self.rows.iter().find(|row| row.id() == id).cloned()
    }

    fn create(&mut self, draft: T::Draft) -> Result<T> {
        let id = self.assign_id()?;
        let row = T::from_draft(id, draft);
        self.rows.push(row.clone());
        tracing::debug!(kind = T::KIND, id, "created");
        Ok(row)
    }

    fn delete(&mut self, id: i32) -> usize {
        let removed = self.remove_where(|row| row.id() == id);
        tracing::debug!(kind = T::KIND, id, removed, "deleted");
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Course, NewCourse};

    fn course(id: i32, name: &str) -> Course {
        Course {
            id,
            name: name.to_string(),
            description: format!("{} description", name),
        }
    }

    fn draft(name: &str) -> NewCourse {
        NewCourse {
            name: name.to_string(),
            description: "d".to_string(),
        }
    }

    fn seeded(policy: IdPolicy) -> Table<Course> {
        Table::with_rows(vec![course(1, "Math"), course(2, "Physics")], policy)
    }

    #[test]
    fn test_create_appends_with_next_id() {
        let mut table = seeded(IdPolicy::Sequential);
        let created = table.create(draft("Chemistry")).unwrap();

        assert_eq!(created.id, 3);
        assert_eq!(created.name, "Chemistry");
        assert_eq!(table.len(), 3);
        assert_eq!(table.rows().last(), Some(&created));
    }

    #[test]
    fn test_get_returns_first_match() {
        let table = Table::with_rows(
            vec![course(1, "First"), course(1, "Duplicate")],
            IdPolicy::Sequential,
        );
        assert_eq!(table.get(1).unwrap().name, "First");
    }

    #[test]
    fn test_get_missing_is_none() {
        let table = seeded(IdPolicy::Sequential);
        assert!(table.get(999).is_none());
    }

    #[test]
    fn test_list_preserves_insertion_order() {
        let mut table = seeded(IdPolicy::Sequential);
        table.create(draft("Biology")).unwrap();

        let names: Vec<_> = table.list().into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["Math", "Physics", "Biology"]);
    }

    #[test]
    fn test_delete_removes_only_matching_id() {
        let mut table = seeded(IdPolicy::Sequential);
        assert_eq!(table.delete(1), 1);
        assert_eq!(table.len(), 1);
        assert_eq!(table.rows()[0].id, 2);

        assert_eq!(table.delete(1), 0);
    }

    #[test]
    fn test_sequential_ids_never_repeat_after_delete() {
        let mut table = seeded(IdPolicy::Sequential);
        table.delete(2);

        let created = table.create(draft("Biology")).unwrap();
        assert_eq!(created.id, 3);
    }

    #[test]
    fn test_length_policy_reuses_ids_after_delete() {
        let mut table = seeded(IdPolicy::Length);
        table.delete(1);

        // One row left, so the next id is 2, colliding with the survivor
        let created = table.create(draft("Biology")).unwrap();
        assert_eq!(created.id, 2);
        assert_eq!(table.rows().iter().filter(|c| c.id == 2).count(), 2);
    }

    #[test]
    fn test_empty_table_starts_at_one() {
        let mut table: Table<Course> = Table::new(IdPolicy::Sequential);
        assert!(table.rows().is_empty());
        assert_eq!(table.create(draft("Art")).unwrap().id, 1);
    }

    #[test]
    fn test_last_id_is_assignable_then_exhausted() {
        let mut table = Table::with_rows(vec![course(i32::MAX - 1, "Old")], IdPolicy::Sequential);

        assert_eq!(table.create(draft("Last")).unwrap().id, i32::MAX);

        let err = table.create(draft("Overflow")).unwrap_err();
        assert!(matches!(err, GradebookError::Storage(_)));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_seeded_max_id_does_not_overflow() {
        let mut table = Table::with_rows(vec![course(i32::MAX, "Max")], IdPolicy::Sequential);

        assert!(table.create(draft("Next")).is_err());
        assert_eq!(table.get(i32::MAX).unwrap().name, "Max");
    }

    #[test]
    fn test_remove_where_uses_predicate() {
        let mut table = seeded(IdPolicy::Sequential);
        let removed = table.remove_where(|c| c.name.starts_with('P'));
        assert_eq!(removed, 1);
        assert_eq!(table.rows()[0].name, "Math");
    }
}
