use std::rc::Rc;

use fxhash::FxHashMap;
use smallvec::SmallVec;
use snowflake::ProcessUniqueId;

use crate::observer::Observer;

/// Opaque registration key. Unique for the lifetime of the
/// process; carries no ordering guarantee.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Handle(ProcessUniqueId);

impl Handle {
	pub(crate) fn mint() -> Self {
		Handle(ProcessUniqueId::new())
	}
}

pub(crate) struct Registry<T> {
	observers: FxHashMap<Handle, Rc<dyn Observer<T>>>,
}

impl<T> Registry<T> {
	pub fn new() -> Self {
		Registry {
			observers: FxHashMap::default(),
		}
	}

	pub fn add(&mut self, observer: Rc<dyn Observer<T>>) -> Handle {
		let handle = Handle::mint();
		self.observers.insert(handle, observer);
		handle
	}

	pub fn remove(&mut self, handle: Handle) {
		self.observers.remove(&handle);
	}

	// fan-out iterates a snapshot, so an observer may add or remove
	// registrations without affecting the pass in flight
	pub fn snapshot(&self) -> SmallVec<[Rc<dyn Observer<T>>; 4]> {
		self.observers.values().cloned().collect()
	}
}
