//! Push-based reactive values.
//!
//! [`Observable`] holds a value and republishes it in full on every write.
//! [`Derived`] is a projection of an observable that is computed on read, so
//! it can never disagree with its source.

use std::fmt;
use std::sync::Arc;

use tokio::sync::watch;

pub use tokio::sync::watch::error::RecvError;

type Projection<T, U> = Arc<dyn Fn(&T) -> U + Send + Sync>;

#[derive(Debug)]
pub struct Observable<T> {
    tx: watch::Sender<T>,
}

impl<T: Clone> Observable<T> {
    pub fn new(initial: T) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx }
    }

    pub fn get(&self) -> T {
        self.tx.borrow().clone()
    }

    /// Replace the value and notify every subscriber, even if it is unchanged.
    pub fn set(&self, value: T) {
        self.tx.send_replace(value);
    }

    /// Modify the value in place and notify every subscriber.
    pub fn update(&self, modify: impl FnOnce(&mut T)) {
        self.tx.send_modify(modify);
    }

    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.tx.subscribe()
    }

    pub fn derive<U>(&self, project: impl Fn(&T) -> U + Send + Sync + 'static) -> Derived<T, U> {
        Derived {
            source: self.tx.subscribe(),
            project: Arc::new(project),
        }
    }
}

pub struct Derived<T, U> {
    source: watch::Receiver<T>,
    project: Projection<T, U>,
}

impl<T, U> fmt::Debug for Derived<T, U>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Derived")
            .field("source", &*self.source.borrow())
            .finish_non_exhaustive()
    }
}

impl<T, U> Derived<T, U> {
    pub fn get(&self) -> U {
        let source = self.source.borrow();
        (self.project)(&*source)
    }

    pub fn subscribe(&self) -> DerivedReceiver<T, U> {
        let mut source = self.source.clone();
        source.mark_unchanged();
        DerivedReceiver {
            source,
            project: Arc::clone(&self.project),
        }
    }
}

/// Subscription to a [`Derived`] value.
pub struct DerivedReceiver<T, U> {
    source: watch::Receiver<T>,
    project: Projection<T, U>,
}

impl<T, U> DerivedReceiver<T, U> {
    /// Current projected value, marking it as seen.
    pub fn current(&mut self) -> U {
        let source = self.source.borrow_and_update();
        (self.project)(&*source)
    }

    /// Whether the source was written since the last `current`/`changed`.
    pub fn has_changed(&self) -> bool {
        self.source.has_changed().unwrap_or(false)
    }

    /// Wait for the next write to the source and return the projected value.
    pub async fn changed(&mut self) -> Result<U, RecvError> {
        self.source.changed().await?;
        Ok(self.current())
    }
}
