//! Open/closed state of the drawer and the outside-dismiss rule.
//!
//! The controller is a two-state machine. Entering [`Visibility::Open`]
//! subscribes to the injected [`InteractionSource`]; leaving it (through
//! [`PanelVisibilityController::toggle`], [`PanelVisibilityController::close`],
//! an outside interaction, or dropping the controller) drops the listener,
//! which releases the subscription. A closed controller holds no listener at
//! all, so nothing can observe interactions on its behalf.

use std::marker::PhantomData;
use std::rc::Rc;

/// A host interaction that may dismiss an open panel.
#[derive(Debug, Clone, PartialEq)]
pub enum Interaction<T> {
    /// Primary pointer press on `target`.
    PointerDown(T),
    /// Focus moved to `target`.
    FocusIn(T),
}

impl<T> Interaction<T> {
    /// Return the element the interaction landed on.
    pub fn target(&self) -> &T {
        match self {
            Interaction::PointerDown(target) | Interaction::FocusIn(target) => {
                target
            },
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            Interaction::PointerDown(_) => "pointer-down",
            Interaction::FocusIn(_) => "focus-in",
        }
    }
}

/// Region considered "inside" the panel.
///
/// `contains` must return `true` for the region itself and for every one of
/// its descendants.
pub trait Boundary<T> {
    /// Return whether `target` lies inside the region.
    fn contains(&self, target: &T) -> bool;
}

impl<T, B: Boundary<T> + ?Sized> Boundary<T> for &B {
    fn contains(&self, target: &T) -> bool {
        (**self).contains(target)
    }
}

impl<T, B: Boundary<T> + ?Sized> Boundary<T> for Rc<B> {
    fn contains(&self, target: &T) -> bool {
        (**self).contains(target)
    }
}

/// Host capability handing out interaction subscriptions.
pub trait InteractionSource<T> {
    /// Live subscription; dropping it unsubscribes.
    type Listener: InteractionListener<T>;

    /// Start a subscription seeing interactions emitted from now on.
    fn subscribe(&self) -> Self::Listener;
}

/// Receiving end of one subscription.
pub trait InteractionListener<T> {
    /// Next interaction delivered since subscribing, in host order.
    fn next_interaction(&mut self) -> Option<Interaction<T>>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Open state of a panel.
pub enum Visibility {
    #[default]
    Closed,
    Open,
}

enum PanelState<L> {
    Closed,
    Open { listener: L },
}

/// Owner of the drawer's open state and the outside-dismiss subscription.
pub struct PanelVisibilityController<T, B, S>
where
    S: InteractionSource<T>,
{
    boundary: B,
    source: S,
    state: PanelState<S::Listener>,
    _target: PhantomData<fn(&T)>,
}

impl<T, B, S> PanelVisibilityController<T, B, S>
where
    B: Boundary<T>,
    S: InteractionSource<T>,
{
    /// Create a closed controller reading `boundary` and subscribing to
    /// `source` only while open.
    pub fn new(boundary: B, source: S) -> Self {
        Self {
            boundary,
            source,
            state: PanelState::Closed,
            _target: PhantomData,
        }
    }

    /// Return whether the panel is open.
    pub fn is_open(&self) -> bool {
        matches!(self.state, PanelState::Open { .. })
    }

    /// Return the current open/closed state.
    pub fn visibility(&self) -> Visibility {
        match self.state {
            PanelState::Closed => Visibility::Closed,
            PanelState::Open { .. } => Visibility::Open,
        }
    }

    /// Return the region treated as inside the panel.
    pub fn boundary(&self) -> &B {
        &self.boundary
    }

    /// Flip between open and closed.
    pub fn toggle(&mut self) {
        if self.is_open() {
            self.close();
        } else {
            self.open();
        }
    }

    /// Open the panel. No-op when already open.
    ///
    /// The listener is created here, after the interaction that requested
    /// the open has been delivered, so that interaction can never count as
    /// an outside press for this panel.
    pub fn open(&mut self) {
        if self.is_open() {
            return;
        }

        let listener = self.source.subscribe();
        self.state = PanelState::Open { listener };
        log::debug!("panel opened, outside-dismiss listener attached");
    }

    /// Close the panel. No-op when already closed.
    pub fn close(&mut self) {
        if let PanelState::Open { .. } =
            std::mem::replace(&mut self.state, PanelState::Closed)
        {
            log::debug!("panel closed, outside-dismiss listener released");
        }
    }

    /// Drain pending interactions and apply the outside-dismiss rule.
    ///
    /// Returns `true` when an interaction outside the boundary closed the
    /// panel. Interactions queued after the dismissing one are discarded
    /// together with the listener.
    pub fn process_interactions(&mut self) -> bool {
        let PanelState::Open { listener } = &mut self.state else {
            return false;
        };

        while let Some(interaction) = listener.next_interaction() {
            if self.boundary.contains(interaction.target()) {
                continue;
            }

            log::debug!(
                "{} outside panel boundary, dismissing",
                interaction.kind()
            );
            self.close();
            return true;
        }

        false
    }
}

impl<T, B, S> std::fmt::Debug for PanelVisibilityController<T, B, S>
where
    B: Boundary<T>,
    S: InteractionSource<T>,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PanelVisibilityController")
            .field("visibility", &self.visibility())
            .finish_non_exhaustive()
    }
}
