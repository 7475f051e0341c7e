use serde::{Deserialize, Serialize};

/// One entry of the `todo` collection. The collection itself is schema-less;
/// this is only the shape the application writes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Todo {
    pub topic: String,
    pub progress: i32,
}

impl Todo {
    pub fn new(topic: impl Into<String>, progress: i32) -> Self {
        Self {
            topic: topic.into(),
            progress,
        }
    }

    /// Document written by the single insert.
    pub fn seed_single() -> Self {
        Self::new("learn angular.js", 10)
    }

    /// Documents written by the batch insert, in insertion order.
    pub fn seed_batch() -> Vec<Self> {
        vec![
            Self::new("learn typescript 大家好", 10),
            Self::new("learn node.js", 10),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{self, Bson};

    #[test]
    fn serializes_to_topic_and_int32_progress() {
        let doc = bson::to_document(&Todo::seed_single()).unwrap();
        assert_eq!(doc.len(), 2);
        assert_eq!(doc.get_str("topic").unwrap(), "learn angular.js");
        assert_eq!(doc.get("progress"), Some(&Bson::Int32(10)));
    }

    #[test]
    fn batch_keeps_unicode_topic() {
        let batch = Todo::seed_batch();
        assert_eq!(batch.len(), 2);
        assert_eq!(batch[0].topic, "learn typescript 大家好");
        assert_eq!(batch[1].topic, "learn node.js");

        let doc = bson::to_document(&batch[0]).unwrap();
        let back: Todo = bson::from_document(doc).unwrap();
        assert_eq!(back, batch[0]);
    }
}
