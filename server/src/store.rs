//! The in-memory todo collection.
//!
//! # Design
//! `TodoStore` owns an insertion-ordered `Vec<Todo>` together with the id
//! generator, both behind a single `RwLock`. Drawing an id and appending the
//! record happen under the same write guard, so two concurrent creates can
//! never observe each other half-done. Reads take the read guard and clone
//! out.
//!
//! Lookups are linear scans. The collection is small and list order must be
//! insertion order, which a `Vec` gives for free.

use std::collections::HashSet;

use rand::Rng;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::error::StoreError;
use crate::model::{Todo, TodoInput};

/// Upper bound (exclusive) for randomly drawn ids.
pub const ID_SPACE: i64 = 1_000_000;

/// How new ids are chosen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IdStrategy {
    /// Uniform draw from `0..ID_SPACE`, redrawn until unused.
    #[default]
    Random,
    /// 1, 2, 3, ...
    Sequential,
}

#[derive(Debug)]
enum IdGenerator {
    // `issued` keeps deleted ids too, so they are never handed out again.
    Random { space: i64, issued: HashSet<i64> },
    Sequential { next: i64 },
}

impl IdGenerator {
    fn new(strategy: IdStrategy) -> Self {
        match strategy {
            IdStrategy::Random => IdGenerator::Random {
                space: ID_SPACE,
                issued: HashSet::new(),
            },
            IdStrategy::Sequential => IdGenerator::Sequential { next: 1 },
        }
    }

    fn next_id(&mut self) -> Result<i64, StoreError> {
        match self {
            IdGenerator::Random { space, issued } => {
                if issued.len() as i64 >= *space {
                    return Err(StoreError::IdSpaceExhausted);
                }
                let mut rng = rand::rng();
                loop {
                    let id = rng.random_range(0..*space);
                    if issued.insert(id) {
                        return Ok(id);
                    }
                }
            }
            IdGenerator::Sequential { next } => {
                let id = *next;
                *next = next.checked_add(1).ok_or(StoreError::IdSpaceExhausted)?;
                Ok(id)
            }
        }
    }
}

#[derive(Debug)]
struct Todos {
    items: Vec<Todo>,
    ids: IdGenerator,
}

impl Todos {
    fn position(&self, id: i64) -> Option<usize> {
        self.items.iter().position(|t| t.id == id)
    }
}

#[derive(Debug)]
pub struct TodoStore {
    inner: RwLock<Todos>,
}

impl Default for TodoStore {
    fn default() -> Self {
        Self::new(IdStrategy::default())
    }
}

impl TodoStore {
    pub fn new(strategy: IdStrategy) -> Self {
        Self::with_generator(IdGenerator::new(strategy))
    }

    fn with_generator(ids: IdGenerator) -> Self {
        Self {
            inner: RwLock::new(Todos {
                items: Vec::new(),
                ids,
            }),
        }
    }

    /// Every todo, in insertion order.
    pub async fn list(&self) -> Vec<Todo> {
        self.inner.read().await.items.clone()
    }

    pub async fn get(&self, id: i64) -> Result<Todo, StoreError> {
        let todos = self.inner.read().await;
        match todos.items.iter().find(|t| t.id == id) {
            Some(todo) => Ok(todo.clone()),
            None => {
                debug!(id, "get: no such todo");
                Err(StoreError::NotFound)
            }
        }
    }

    /// Append a new todo built from `title` and `description`.
    ///
    /// `input.completed` is accepted and dropped.
    pub async fn create(&self, input: TodoInput) -> Result<Todo, StoreError> {
        let mut todos = self.inner.write().await;
        let id = todos.ids.next_id()?;
        let todo = Todo {
            id,
            title: input.title,
            description: input.description,
        };
        todos.items.push(todo.clone());
        info!(id, completed = ?input.completed, total = todos.items.len(), "created todo");
        Ok(todo)
    }

    /// Overwrite `title` and `description` of one todo and return the whole
    /// collection. Absent input fields overwrite with absent.
    pub async fn update(&self, id: i64, input: TodoInput) -> Result<Vec<Todo>, StoreError> {
        let mut todos = self.inner.write().await;
        let Some(index) = todos.position(id) else {
            debug!(id, "update: no such todo");
            return Err(StoreError::NotFound);
        };
        let todo = &mut todos.items[index];
        todo.title = input.title;
        todo.description = input.description;
        info!(id, "updated todo");
        Ok(todos.items.clone())
    }

    pub async fn delete(&self, id: i64) -> Result<(), StoreError> {
        let mut todos = self.inner.write().await;
        let Some(index) = todos.position(id) else {
            debug!(id, "delete: no such todo");
            return Err(StoreError::NotFound);
        };
        todos.items.remove(index);
        info!(id, total = todos.items.len(), "deleted todo");
        Ok(())
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.items.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.items.is_empty()
    }
}
