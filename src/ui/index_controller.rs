//! Index controller - a current index that is either owned or borrowed
//!
//! Wraps any [`IndexedView`] and hands it a [`Binding`]: the current index plus
//! `increment(bound)` / `decrement(bound)` message constructors. The wrapped view
//! never learns who owns the value.
//!
//! # Ownership
//!
//! - **Internal**: the controller keeps the index itself, starting at 0. The binding
//!   produces [`IndexUpdate`] messages (lifted into the application's message type)
//!   that must be routed back into [`IndexController::update`].
//! - **External**: the embedding application owns the index. It supplies the value
//!   with [`IndexController::supply`] and receives its own increment/decrement
//!   messages carrying the bound.
//!
//! The ownership is fixed at construction. The key passed at construction names
//! the managed property in logs and errors; picking a key that clashes with an
//! unrelated property of the wrapped view is the caller's problem.

use std::fmt;
use std::sync::Arc;

use iced::Element;
use tracing::{debug, warn};

/// Message constructor taking the bound (slide count)
pub type Mutator<Message> = Arc<dyn Fn(usize) -> Message + Send + Sync>;

/// Lifts an internal index update into the application's message type
pub type Lift<Message> = Arc<dyn Fn(IndexUpdate) -> Message + Send + Sync>;

/// A pending change to an internally owned index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexUpdate {
    /// Step forward, wrapping to 0 after `bound - 1`
    Increment(usize),
    /// Step backward, wrapping to `bound - 1` before 0
    Decrement(usize),
}

impl IndexUpdate {
    /// The bound this update was issued with
    pub fn bound(self) -> usize {
        match self {
            Self::Increment(bound) | Self::Decrement(bound) => bound,
        }
    }

    /// Compute the next index from the previous one
    ///
    /// A zero bound leaves the index untouched.
    pub fn apply(self, previous: usize) -> usize {
        match self {
            Self::Increment(0) | Self::Decrement(0) => previous,
            Self::Increment(bound) => (previous % bound + 1) % bound,
            Self::Decrement(bound) => (previous % bound + bound - 1) % bound,
        }
    }
}

/// Internally owned index value
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IndexState {
    value: usize,
}

impl IndexState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> usize {
        self.value
    }

    /// Apply an update against the value held right now
    pub fn apply(&mut self, update: IndexUpdate) {
        self.value = update.apply(self.value);
    }
}

/// Errors raised while composing or driving an [`IndexController`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexError {
    /// Some, but not all, of the external index parts were supplied
    IncompleteExternal { key: String, missing: Vec<String> },
    /// An internal update reached a controller whose index is owned elsewhere
    NotOwned { key: String },
    /// An external value was supplied to a controller that owns its index
    NotExternal { key: String },
}

impl fmt::Display for IndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexError::IncompleteExternal { key, missing } => write!(
                f,
                "external `{}` needs the index and both mutators, missing: {}",
                key,
                missing.join(", ")
            ),
            IndexError::NotOwned { key } => {
                write!(f, "`{}` is owned externally and cannot be updated here", key)
            }
            IndexError::NotExternal { key } => {
                write!(f, "`{}` is owned internally and cannot be supplied", key)
            }
        }
    }
}

impl std::error::Error for IndexError {}

/// Who owns the current index
pub enum Ownership<Message> {
    /// The controller owns the index; updates come back through `lift`
    Internal { lift: Lift<Message> },
    /// The embedding application owns the index
    External {
        index: usize,
        increment: Mutator<Message>,
        decrement: Mutator<Message>,
    },
}

impl<Message> Ownership<Message> {
    pub fn internal(lift: impl Fn(IndexUpdate) -> Message + Send + Sync + 'static) -> Self {
        Self::Internal {
            lift: Arc::new(lift),
        }
    }

    pub fn external(
        index: usize,
        increment: impl Fn(usize) -> Message + Send + Sync + 'static,
        decrement: impl Fn(usize) -> Message + Send + Sync + 'static,
    ) -> Self {
        Self::External {
            index,
            increment: Arc::new(increment),
            decrement: Arc::new(decrement),
        }
    }

    /// Pick the ownership from whichever parts are present
    ///
    /// Nothing present means internal ownership; all three present means external
    /// ownership. Anything in between is rejected.
    pub fn from_parts(
        key: &str,
        index: Option<usize>,
        increment: Option<Mutator<Message>>,
        decrement: Option<Mutator<Message>>,
        lift: Lift<Message>,
    ) -> Result<Self, IndexError> {
        match (index, increment, decrement) {
            (None, None, None) => Ok(Self::Internal { lift }),
            (Some(index), Some(increment), Some(decrement)) => Ok(Self::External {
                index,
                increment,
                decrement,
            }),
            (index, increment, decrement) => {
                let mut missing = Vec::new();
                if index.is_none() {
                    missing.push(key.to_string());
                }
                if increment.is_none() {
                    missing.push(format!("{}_increment", key));
                }
                if decrement.is_none() {
                    missing.push(format!("{}_decrement", key));
                }
                Err(IndexError::IncompleteExternal {
                    key: key.to_string(),
                    missing,
                })
            }
        }
    }

    pub fn is_external(&self) -> bool {
        matches!(self, Self::External { .. })
    }
}

impl<Message> fmt::Debug for Ownership<Message> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Internal { .. } => f.write_str("Internal"),
            Self::External { index, .. } => f.debug_struct("External").field("index", index).finish(),
        }
    }
}

enum Route<Message> {
    Internal(Lift<Message>),
    External {
        increment: Mutator<Message>,
        decrement: Mutator<Message>,
    },
}

impl<Message> Clone for Route<Message> {
    fn clone(&self) -> Self {
        match self {
            Self::Internal(lift) => Self::Internal(Arc::clone(lift)),
            Self::External {
                increment,
                decrement,
            } => Self::External {
                increment: Arc::clone(increment),
                decrement: Arc::clone(decrement),
            },
        }
    }
}

/// What the wrapped view sees, identical in both ownership modes
pub struct Binding<Message> {
    index: usize,
    route: Route<Message>,
}

impl<Message> Clone for Binding<Message> {
    fn clone(&self) -> Self {
        Self {
            index: self.index,
            route: self.route.clone(),
        }
    }
}

impl<Message> Binding<Message> {
    /// Current index
    pub fn index(&self) -> usize {
        self.index
    }

    /// Message that moves the index one step forward within `bound`
    pub fn increment(&self, bound: usize) -> Message {
        match &self.route {
            Route::Internal(lift) => lift(IndexUpdate::Increment(bound)),
            Route::External { increment, .. } => increment(bound),
        }
    }

    /// Message that moves the index one step backward within `bound`
    pub fn decrement(&self, bound: usize) -> Message {
        match &self.route {
            Route::Internal(lift) => lift(IndexUpdate::Decrement(bound)),
            Route::External { decrement, .. } => decrement(bound),
        }
    }
}

impl<Message> fmt::Debug for Binding<Message> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Binding").field("index", &self.index).finish()
    }
}

/// A view that renders from its own props plus an index [`Binding`]
pub trait IndexedView<'a, Message> {
    /// Everything the view needs besides the index
    type Props;

    fn view(&self, props: Self::Props, binding: Binding<Message>) -> Element<'a, Message>;
}

enum Mode<Message> {
    Internal {
        state: IndexState,
        lift: Lift<Message>,
    },
    External {
        index: usize,
        increment: Mutator<Message>,
        decrement: Mutator<Message>,
    },
}

/// Wraps a view and feeds it the current index, owned or borrowed
pub struct IndexController<W, Message> {
    key: &'static str,
    inner: W,
    mode: Mode<Message>,
}

impl<W, Message> IndexController<W, Message> {
    pub fn new(key: &'static str, inner: W, ownership: Ownership<Message>) -> Self {
        let mode = match ownership {
            Ownership::Internal { lift } => Mode::Internal {
                state: IndexState::new(),
                lift,
            },
            Ownership::External {
                index,
                increment,
                decrement,
            } => Mode::External {
                index,
                increment,
                decrement,
            },
        };
        debug!(
            "Index controller `{}` created ({})",
            key,
            if matches!(mode, Mode::External { .. }) {
                "external"
            } else {
                "internal"
            }
        );
        Self { key, inner, mode }
    }

    /// Controller that owns its index, starting at 0
    pub fn internal(
        key: &'static str,
        inner: W,
        lift: impl Fn(IndexUpdate) -> Message + Send + Sync + 'static,
    ) -> Self {
        Self::new(key, inner, Ownership::internal(lift))
    }

    /// Controller that reads and forwards to an index owned by the caller
    pub fn external(
        key: &'static str,
        inner: W,
        index: usize,
        increment: impl Fn(usize) -> Message + Send + Sync + 'static,
        decrement: impl Fn(usize) -> Message + Send + Sync + 'static,
    ) -> Self {
        Self::new(key, inner, Ownership::external(index, increment, decrement))
    }

    pub fn key(&self) -> &'static str {
        self.key
    }

    pub fn inner(&self) -> &W {
        &self.inner
    }

    pub fn is_external(&self) -> bool {
        matches!(self.mode, Mode::External { .. })
    }

    /// Effective current index
    pub fn index(&self) -> usize {
        match &self.mode {
            Mode::Internal { state, .. } => state.value(),
            Mode::External { index, .. } => *index,
        }
    }

    /// Binding handed to the wrapped view
    pub fn binding(&self) -> Binding<Message> {
        let route = match &self.mode {
            Mode::Internal { lift, .. } => Route::Internal(Arc::clone(lift)),
            Mode::External {
                increment,
                decrement,
                ..
            } => Route::External {
                increment: Arc::clone(increment),
                decrement: Arc::clone(decrement),
            },
        };
        Binding {
            index: self.index(),
            route,
        }
    }

    /// Apply an internal update to the owned index
    pub fn update(&mut self, update: IndexUpdate) -> Result<(), IndexError> {
        match &mut self.mode {
            Mode::Internal { state, .. } => {
                if update.bound() == 0 {
                    debug!("Ignoring {:?} on `{}`: nothing to navigate", update, self.key);
                }
                state.apply(update);
                Ok(())
            }
            Mode::External { .. } => {
                warn!("Dropping {:?}: `{}` is owned externally", update, self.key);
                Err(IndexError::NotOwned {
                    key: self.key.to_string(),
                })
            }
        }
    }

    /// Supply the owner's current value to an externally owned controller
    pub fn supply(&mut self, value: usize) -> Result<(), IndexError> {
        match &mut self.mode {
            Mode::External { index, .. } => {
                *index = value;
                Ok(())
            }
            Mode::Internal { .. } => Err(IndexError::NotExternal {
                key: self.key.to_string(),
            }),
        }
    }

    /// Render the wrapped view with its props and the current binding
    pub fn view<'a>(&self, props: <W as IndexedView<'a, Message>>::Props) -> Element<'a, Message>
    where
        W: IndexedView<'a, Message>,
    {
        self.inner.view(props, self.binding())
    }
}

impl<W: fmt::Debug, Message> fmt::Debug for IndexController<W, Message> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IndexController")
            .field("key", &self.key)
            .field("inner", &self.inner)
            .field("external", &self.is_external())
            .field("index", &self.index())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Msg {
        Index(IndexUpdate),
        Next(usize),
        Prev(usize),
    }

    #[derive(Debug)]
    struct Plain;

    fn internal() -> IndexController<Plain, Msg> {
        IndexController::internal("slide_index", Plain, Msg::Index)
    }

    /// Feed a binding message back the way an application's update would
    fn route(controller: &mut IndexController<Plain, Msg>, msg: Msg) {
        if let Msg::Index(update) = msg {
            controller.update(update).unwrap();
        }
    }

    #[test]
    fn test_update_wraps_both_directions() {
        assert_eq!(IndexUpdate::Decrement(3).apply(0), 2);
        assert_eq!(IndexUpdate::Increment(3).apply(2), 0);
        assert_eq!(IndexUpdate::Increment(3).apply(0), 1);
        assert_eq!(IndexUpdate::Decrement(1).apply(0), 0);
        assert_eq!(IndexUpdate::Increment(1).apply(0), 0);
    }

    #[test]
    fn test_apply_handles_largest_index() {
        assert_eq!(IndexUpdate::Increment(4).apply(usize::MAX), 0);
        assert_eq!(IndexUpdate::Decrement(4).apply(usize::MAX), 2);
        assert_eq!(IndexUpdate::Increment(3).apply(usize::MAX), 1);
        assert_eq!(IndexUpdate::Increment(3).apply(7), 2);
    }

    #[test]
    fn test_zero_bound_is_noop() {
        assert_eq!(IndexUpdate::Increment(0).apply(4), 4);
        assert_eq!(IndexUpdate::Decrement(0).apply(0), 0);

        let mut controller = internal();
        controller.update(IndexUpdate::Decrement(0)).unwrap();
        assert_eq!(controller.index(), 0);
    }

    #[test]
    fn test_internal_starts_at_zero() {
        let controller = internal();
        assert!(!controller.is_external());
        assert_eq!(controller.index(), 0);
        assert_eq!(controller.binding().index(), 0);
    }

    #[test]
    fn test_internal_decrement_walks_backwards_to_start() {
        for n in 1..=6 {
            let mut controller = internal();
            let mut visited = Vec::new();
            for _ in 0..n {
                let msg = controller.binding().decrement(n);
                route(&mut controller, msg);
                visited.push(controller.index());
            }
            let expected: Vec<usize> = (0..n).rev().collect();
            assert_eq!(visited, expected, "slide count {}", n);
        }
    }

    #[test]
    fn test_internal_increment_wraps_to_first() {
        let mut controller = internal();
        controller.update(IndexUpdate::Decrement(3)).unwrap();
        assert_eq!(controller.index(), 2);

        let msg = controller.binding().increment(3);
        assert_eq!(msg, Msg::Index(IndexUpdate::Increment(3)));
        route(&mut controller, msg);
        assert_eq!(controller.index(), 0);
    }

    #[test]
    fn test_queued_updates_are_not_lost() {
        // Two clicks issued from the same rendered binding, processed afterwards
        let mut controller = internal();
        let binding = controller.binding();
        let first = binding.increment(5);
        let second = binding.increment(5);

        route(&mut controller, first);
        route(&mut controller, second);
        assert_eq!(controller.index(), 2);
    }

    #[test]
    fn test_external_forwards_to_owner() {
        let increments = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&increments);
        let controller: IndexController<Plain, Msg> = IndexController::external(
            "slide_index",
            Plain,
            1,
            move |bound| {
                counter.fetch_add(1, Ordering::SeqCst);
                Msg::Next(bound)
            },
            Msg::Prev,
        );

        let binding = controller.binding();
        assert_eq!(binding.index(), 1);
        assert_eq!(increments.load(Ordering::SeqCst), 0);

        assert_eq!(binding.increment(3), Msg::Next(3));
        assert_eq!(increments.load(Ordering::SeqCst), 1);
        assert_eq!(binding.decrement(3), Msg::Prev(3));

        // The shown index only moves when the owner supplies a new one
        assert_eq!(controller.index(), 1);
    }

    #[test]
    fn test_external_supply_and_update() {
        let mut controller: IndexController<Plain, Msg> =
            IndexController::external("slide_index", Plain, 1, Msg::Next, Msg::Prev);

        controller.supply(0).unwrap();
        assert_eq!(controller.index(), 0);
        assert_eq!(controller.binding().index(), 0);

        let err = controller.update(IndexUpdate::Increment(3)).unwrap_err();
        assert_eq!(
            err,
            IndexError::NotOwned {
                key: "slide_index".to_string()
            }
        );
        assert_eq!(controller.index(), 0);
    }

    #[test]
    fn test_internal_rejects_supply() {
        let mut controller = internal();
        assert!(matches!(
            controller.supply(2),
            Err(IndexError::NotExternal { .. })
        ));
        assert_eq!(controller.index(), 0);
    }

    #[test]
    fn test_from_parts_selects_mode() {
        let lift: Lift<Msg> = Arc::new(Msg::Index);

        let ownership = Ownership::from_parts("slide_index", None, None, None, lift.clone());
        assert!(!ownership.unwrap().is_external());

        let ownership = Ownership::from_parts(
            "slide_index",
            Some(2),
            Some(Arc::new(Msg::Next) as Mutator<Msg>),
            Some(Arc::new(Msg::Prev) as Mutator<Msg>),
            lift,
        )
        .unwrap();
        let controller = IndexController::new("slide_index", Plain, ownership);
        assert!(controller.is_external());
        assert_eq!(controller.index(), 2);
    }

    #[test]
    fn test_from_parts_rejects_partial_external() {
        let lift: Lift<Msg> = Arc::new(Msg::Index);

        let err = Ownership::from_parts(
            "slide_index",
            Some(1),
            Some(Arc::new(Msg::Next) as Mutator<Msg>),
            None,
            lift.clone(),
        )
        .unwrap_err();
        assert_eq!(
            err,
            IndexError::IncompleteExternal {
                key: "slide_index".to_string(),
                missing: vec!["slide_index_decrement".to_string()],
            }
        );

        let err = Ownership::from_parts(
            "slide_index",
            None,
            Some(Arc::new(Msg::Next) as Mutator<Msg>),
            Some(Arc::new(Msg::Prev) as Mutator<Msg>),
            lift,
        )
        .unwrap_err();
        assert!(err.to_string().contains("missing: slide_index"));
    }
}
