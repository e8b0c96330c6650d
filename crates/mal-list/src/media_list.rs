//! A user's list, partitioned by series status and by user status.
//!
//! Records are classified once when the list is built. Each category keeps
//! the identity keys of its members in list order; the resolved view of a
//! category is materialized on first access and cached for the lifetime of
//! the list.

use crate::error::InvalidCategoryError;
use crate::identity::{ItemKey, MediaItem};
use once_cell::sync::OnceCell;
use shared::{ListStats, SeriesStatus, UserStatus};
use std::collections::HashMap;
use std::ops::Deref;
use std::sync::Arc;
use tracing::{debug, trace, warn};

/// A category a list entry can belong to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Series(SeriesStatus),
    User(UserStatus),
}

impl Category {
    /// Every category, series axis first
    pub const ALL: [Category; 8] = [
        Category::Series(SeriesStatus::Started),
        Category::Series(SeriesStatus::Finished),
        Category::Series(SeriesStatus::Planned),
        Category::User(UserStatus::Watching),
        Category::User(UserStatus::Completed),
        Category::User(UserStatus::OnHold),
        Category::User(UserStatus::Dropped),
        Category::User(UserStatus::PlanToConsume),
    ];
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Series(status) => write!(f, "series:{}", status),
            Category::User(status) => write!(f, "user:{}", status),
        }
    }
}

impl From<SeriesStatus> for Category {
    fn from(status: SeriesStatus) -> Self {
        Category::Series(status)
    }
}

impl From<UserStatus> for Category {
    fn from(status: UserStatus) -> Self {
        Category::User(status)
    }
}

/// Index list and memoized view for one category
#[derive(Debug)]
struct CategorySlot<T> {
    keys: Vec<ItemKey>,
    view: OnceCell<Vec<Arc<T>>>,
}

impl<T> CategorySlot<T> {
    fn new() -> Self {
        Self {
            keys: Vec::new(),
            view: OnceCell::new(),
        }
    }
}

/// An immutable list with O(1) access to each status category
///
/// Dereferences to the canonical list in construction order.
#[derive(Debug)]
pub struct CategorizedMediaList<T> {
    /// Records in construction order
    items: Vec<Arc<T>>,
    /// Identity key -> record
    resolution: HashMap<ItemKey, Arc<T>>,

    // Series status
    started: CategorySlot<T>,
    finished: CategorySlot<T>,
    planned: CategorySlot<T>,

    // User status
    watching: CategorySlot<T>,
    completed: CategorySlot<T>,
    on_hold: CategorySlot<T>,
    dropped: CategorySlot<T>,
    plan_to_consume: CategorySlot<T>,
}

impl<T: MediaItem> CategorizedMediaList<T> {
    /// Build a list, classifying every record on both status axes
    ///
    /// Content-identical records share one resolution entry but keep their
    /// place in the canonical list and in each category. Fails on the first
    /// record whose series or user status code is not recognized.
    pub fn new(items: impl IntoIterator<Item = T>) -> Result<Self, InvalidCategoryError> {
        let mut list = Self::empty();

        for (position, item) in items.into_iter().enumerate() {
            let status = item.status();

            let series = SeriesStatus::from_code(status.series).ok_or_else(|| {
                warn!(position, value = status.series, "Unrecognized series status");
                InvalidCategoryError::series(status.series)
            })?;
            let user = UserStatus::from_code(status.user).ok_or_else(|| {
                warn!(position, value = status.user, "Unrecognized user status");
                InvalidCategoryError::user(status.user)
            })?;

            let key = item.identity_key();
            let item = Arc::new(item);

            list.resolution.insert(key, Arc::clone(&item));
            list.slot_mut(Category::Series(series)).keys.push(key);
            list.slot_mut(Category::User(user)).keys.push(key);
            list.items.push(item);
        }

        debug!(
            items = list.items.len(),
            unique = list.resolution.len(),
            started = list.started.keys.len(),
            finished = list.finished.keys.len(),
            planned = list.planned.keys.len(),
            "Categorized media list built"
        );

        Ok(list)
    }
}

impl<T> CategorizedMediaList<T> {
    fn empty() -> Self {
        Self {
            items: Vec::new(),
            resolution: HashMap::new(),
            started: CategorySlot::new(),
            finished: CategorySlot::new(),
            planned: CategorySlot::new(),
            watching: CategorySlot::new(),
            completed: CategorySlot::new(),
            on_hold: CategorySlot::new(),
            dropped: CategorySlot::new(),
            plan_to_consume: CategorySlot::new(),
        }
    }

    fn slot(&self, category: Category) -> &CategorySlot<T> {
        match category {
            Category::Series(SeriesStatus::Started) => &self.started,
            Category::Series(SeriesStatus::Finished) => &self.finished,
            Category::Series(SeriesStatus::Planned) => &self.planned,
            Category::User(UserStatus::Watching) => &self.watching,
            Category::User(UserStatus::Completed) => &self.completed,
            Category::User(UserStatus::OnHold) => &self.on_hold,
            Category::User(UserStatus::Dropped) => &self.dropped,
            Category::User(UserStatus::PlanToConsume) => &self.plan_to_consume,
        }
    }

    fn slot_mut(&mut self, category: Category) -> &mut CategorySlot<T> {
        match category {
            Category::Series(SeriesStatus::Started) => &mut self.started,
            Category::Series(SeriesStatus::Finished) => &mut self.finished,
            Category::Series(SeriesStatus::Planned) => &mut self.planned,
            Category::User(UserStatus::Watching) => &mut self.watching,
            Category::User(UserStatus::Completed) => &mut self.completed,
            Category::User(UserStatus::OnHold) => &mut self.on_hold,
            Category::User(UserStatus::Dropped) => &mut self.dropped,
            Category::User(UserStatus::PlanToConsume) => &mut self.plan_to_consume,
        }
    }

    /// Records in `category`, in list order
    ///
    /// Resolved on the first call and cached; concurrent first calls block
    /// on a single resolution and all receive the same slice.
    pub fn view(&self, category: Category) -> &[Arc<T>] {
        let slot = self.slot(category);
        slot.view.get_or_init(|| {
            trace!(%category, items = slot.keys.len(), "Materializing category view");
            slot.keys
                .iter()
                // Every key was inserted into the resolution table at construction
                .map(|key| Arc::clone(&self.resolution[key]))
                .collect()
        })
    }

    pub fn started(&self) -> &[Arc<T>] {
        self.view(Category::Series(SeriesStatus::Started))
    }

    pub fn finished(&self) -> &[Arc<T>] {
        self.view(Category::Series(SeriesStatus::Finished))
    }

    pub fn planned(&self) -> &[Arc<T>] {
        self.view(Category::Series(SeriesStatus::Planned))
    }

    pub fn watching(&self) -> &[Arc<T>] {
        self.view(Category::User(UserStatus::Watching))
    }

    pub fn completed(&self) -> &[Arc<T>] {
        self.view(Category::User(UserStatus::Completed))
    }

    pub fn on_hold(&self) -> &[Arc<T>] {
        self.view(Category::User(UserStatus::OnHold))
    }

    pub fn dropped(&self) -> &[Arc<T>] {
        self.view(Category::User(UserStatus::Dropped))
    }

    pub fn plan_to_consume(&self) -> &[Arc<T>] {
        self.view(Category::User(UserStatus::PlanToConsume))
    }

    /// The canonical list
    pub fn items(&self) -> &[Arc<T>] {
        &self.items
    }

    /// Look up a record by identity
    pub fn get(&self, key: &ItemKey) -> Option<&Arc<T>> {
        self.resolution.get(key)
    }

    /// Number of distinct identities in the list
    pub fn unique_len(&self) -> usize {
        self.resolution.len()
    }

    /// Raw index list of `category`
    pub fn category_keys(&self, category: Category) -> &[ItemKey] {
        &self.slot(category).keys
    }

    /// Whether the view of `category` has been resolved yet
    pub fn is_materialized(&self, category: Category) -> bool {
        self.slot(category).view.get().is_some()
    }

    /// Entry counts per user status, without resolving any view
    pub fn stats(&self) -> ListStats {
        ListStats {
            current: self.watching.keys.len(),
            completed: self.completed.keys.len(),
            on_hold: self.on_hold.keys.len(),
            dropped: self.dropped.keys.len(),
            planned: self.plan_to_consume.keys.len(),
            days: None,
        }
    }
}

impl<T> Deref for CategorizedMediaList<T> {
    type Target = [Arc<T>];

    fn deref(&self) -> &Self::Target {
        &self.items
    }
}

impl<'a, T> IntoIterator for &'a CategorizedMediaList<T> {
    type Item = &'a Arc<T>;
    type IntoIter = std::slice::Iter<'a, Arc<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
