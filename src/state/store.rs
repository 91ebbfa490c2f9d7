use super::annotation::{AnnotationField, TimestampAnnotation};
use crate::utils::parse_seconds_input;

/// Ordered list of annotations. Entries stay in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnnotationStore {
    items: Vec<TimestampAnnotation>,
}

impl AnnotationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[TimestampAnnotation] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn find(&self, id: i64) -> Option<&TimestampAnnotation> {
        self.items.iter().find(|ts| ts.id == id)
    }

    /// Append a new annotation starting at `start`, returning its id.
    ///
    /// `now_millis` is the creation instant; if it collides with an existing
    /// id the new id is moved past the largest one, or to the next free id
    /// above `now_millis` when the largest is `i64::MAX`.
    pub fn add(&mut self, now_millis: i64, start: f64, span: f64) -> i64 {
        let id = self.next_id(now_millis);
        self.items.push(TimestampAnnotation::new(id, start, span));
        id
    }

    fn next_id(&self, now_millis: i64) -> i64 {
        if self.find(now_millis).is_none() {
            return now_millis;
        }
        let max_existing = self.items.iter().map(|ts| ts.id).max().unwrap_or(now_millis);
        if let Some(next) = max_existing.checked_add(1) {
            return next;
        }
        let mut candidate = now_millis;
        while self.find(candidate).is_some() {
            candidate = candidate.wrapping_add(1);
        }
        candidate
    }

    /// Apply a field edit. Returns `false` if no annotation has `id`.
    pub fn edit(&mut self, id: i64, field: AnnotationField, value: &str) -> bool {
        let Some(ts) = self.items.iter_mut().find(|ts| ts.id == id) else {
            return false;
        };
        match field {
            AnnotationField::Start => ts.start = parse_seconds_input(value),
            AnnotationField::End => ts.end = parse_seconds_input(value),
            AnnotationField::Emotion => ts.emotion = value.to_string(),
            AnnotationField::Gender => ts.gender = value.to_string(),
        }
        true
    }

    /// Remove an annotation by id.
    pub fn remove(&mut self, id: i64) -> bool {
        let len = self.items.len();
        self.items.retain(|ts| ts.id != id);
        self.items.len() < len
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn replace(&mut self, items: Vec<TimestampAnnotation>) {
        self.items = items;
    }
}
