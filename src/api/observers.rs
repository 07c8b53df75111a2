use std::fmt;

/// Single-slot change listener for one bindable property.
///
/// Registering a new listener replaces the previous one. Notifications run
/// synchronously on the caller's stack, in the order mutations happen.
pub struct PropertyObserver<T> {
    listener: Option<Box<dyn FnMut(T)>>,
}

impl<T> Default for PropertyObserver<T> {
    fn default() -> Self {
        Self { listener: None }
    }
}

impl<T> fmt::Debug for PropertyObserver<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyObserver")
            .field("registered", &self.is_registered())
            .finish()
    }
}

impl<T> PropertyObserver<T> {
    /// Installs `listener`, returning `true` when it replaced an existing one.
    pub fn register(&mut self, listener: impl FnMut(T) + 'static) -> bool {
        self.listener.replace(Box::new(listener)).is_some()
    }

    /// Removes the listener. Returns `true` when one was registered.
    pub fn clear(&mut self) -> bool {
        self.listener.take().is_some()
    }

    #[must_use]
    pub fn is_registered(&self) -> bool {
        self.listener.is_some()
    }

    pub fn notify(&mut self, value: T) {
        if let Some(listener) = self.listener.as_mut() {
            listener(value);
        }
    }
}
