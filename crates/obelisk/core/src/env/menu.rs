/// The host's list of pending menu entries.
///
/// The guard only ever drops the entry that was just added; everything else
/// about the menu stays under host control.
pub trait MenuEntries {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes the most recently added entry. No-op on an empty menu.
    fn remove_last(&mut self);
}
