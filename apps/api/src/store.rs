use tokio::sync::RwLock;

use crate::models::{Education, Experience, Skill};

/// An append-only sequence of records. Reads observe insertion order.
///
/// `append` reports the new record's position captured under the write lock,
/// so concurrent appends each receive a distinct, monotonically increasing id
/// even when two clients submit identical payloads.
#[derive(Debug)]
pub struct Collection<T> {
    items: RwLock<Vec<T>>,
}

impl<T: Clone> Collection<T> {
    fn new(seed: Vec<T>) -> Self {
        Self {
            items: RwLock::new(seed),
        }
    }

    pub async fn list(&self) -> Vec<T> {
        self.items.read().await.clone()
    }

    pub async fn get(&self, index: usize) -> Option<T> {
        self.items.read().await.get(index).cloned()
    }

    pub async fn append(&self, record: T) -> usize {
        let mut items = self.items.write().await;
        items.push(record);
        items.len() - 1
    }
}

/// In-memory resume data, one append-only collection per resource type.
/// Constructed once at startup and shared through `AppState`; discarded when
/// the process exits.
#[derive(Debug)]
pub struct ResumeStore {
    pub experience: Collection<Experience>,
    pub education: Collection<Education>,
    pub skill: Collection<Skill>,
}

impl ResumeStore {
    /// Store preloaded with one record per resource type.
    pub fn with_seed_data() -> Self {
        Self {
            experience: Collection::new(vec![Experience {
                title: "Software Developer".to_string(),
                company: "A Cool Company".to_string(),
                start_date: "October 2022".to_string(),
                end_date: "Present".to_string(),
                description: "Writing Python Code".to_string(),
                logo: "example-logo.png".to_string(),
            }]),
            education: Collection::new(vec![Education {
                course: "Computer Science".to_string(),
                school: "University of Tech".to_string(),
                start_date: "September 2019".to_string(),
                end_date: "July 2022".to_string(),
                grade: "80%".to_string(),
                logo: "example-logo.png".to_string(),
            }]),
            skill: Collection::new(vec![Skill {
                name: "Python".to_string(),
                proficiency: "1-2 Years".to_string(),
                logo: "example-logo.png".to_string(),
            }]),
        }
    }
}
