use std::cell::{Cell, RefCell};
use std::fmt::Debug;
use std::rc::Rc;

use crate::observer::{Callback, Observer};
use crate::registry::{Handle, Registry};

pub struct Store<T> {
	pub(crate) body: Rc<StoreBody<T>>,
}

pub(crate) struct StoreBody<T> {
	value: RefCell<T>,
	muted: Cell<bool>,
	observers: RefCell<Registry<T>>,
}

impl<T> Clone for Store<T> {
	fn clone(&self) -> Self {
		Self {
			body: self.body.clone(),
		}
	}
}

impl<T> Default for Store<T>
where
	T: Default + 'static,
{
	fn default() -> Self {
		Store::new(Default::default())
	}
}

pub trait Toggle {
	fn toggle(&mut self);
}

impl Toggle for bool {
	fn toggle(&mut self) {
		*self = !*self
	}
}

impl<T> Store<T>
where
	T: 'static,
{
	pub fn new(value: T) -> Self {
		Store {
			body: Rc::new(StoreBody {
				value: RefCell::new(value),
				muted: Cell::new(false),
				observers: RefCell::new(Registry::new()),
			}),
		}
	}

	#[inline]
	pub fn get(&self) -> T
	where
		T: Clone,
	{
		self.body.current()
	}

	#[inline]
	pub fn update(&self, func: impl FnOnce(&mut T))
	where
		T: Clone + PartialEq,
	{
		self.body.update(func)
	}

	#[inline]
	pub fn set(&self, value: T)
	where
		T: Clone + PartialEq,
	{
		self.body.commit(value)
	}

	#[inline]
	pub fn replace(&self, value: T) -> T
	where
		T: Clone + PartialEq,
	{
		let old = self.body.current();
		self.body.commit(value);
		old
	}

	#[inline]
	pub fn toggle(&self)
	where
		T: Toggle + Clone + PartialEq,
	{
		self.update(T::toggle)
	}

	/// Registers `observer` and immediately invokes it once with
	/// the current value.
	pub fn observe(&self, observer: impl Observer<T> + 'static) -> Handle
	where
		T: Clone,
	{
		let observer: Rc<dyn Observer<T>> = Rc::new(observer);
		let handle = self.body.attach(observer.clone());
		let current = self.body.current();
		observer.on_change(&current);
		handle
	}

	pub fn on_change(&self, func: impl Fn(&T) + 'static) -> Handle
	where
		T: Clone,
	{
		self.observe(Callback::new(func))
	}

	/// Unknown or already-removed handles are ignored.
	pub fn unobserve(&self, handle: Handle) {
		self.body.observers.borrow_mut().remove(handle);
	}

	/// Derives a child store bound to one field of this store's
	/// value, synchronized in both directions.
	pub fn bind<F, G, S>(&self, get: G, set: S) -> Store<F>
	where
		T: Clone + PartialEq,
		F: Clone + PartialEq + 'static,
		G: Fn(&T) -> F + 'static,
		S: Fn(&mut T, F) + 'static,
	{
		crate::bind::bind(&self.body, get, set)
	}
}

impl<T> StoreBody<T>
where
	T: 'static,
{
	pub(crate) fn current(&self) -> T
	where
		T: Clone,
	{
		self.value.borrow().clone()
	}

	pub(crate) fn attach(&self, observer: Rc<dyn Observer<T>>) -> Handle {
		self.observers.borrow_mut().add(observer)
	}

	pub(crate) fn update(&self, func: impl FnOnce(&mut T))
	where
		T: Clone + PartialEq,
	{
		let mut next = self.current();
		func(&mut next);
		self.commit(next);
	}

	// The value is stored before any observer runs.
	pub(crate) fn commit(&self, next: T)
	where
		T: Clone + PartialEq,
	{
		let duplicate = *self.value.borrow() == next;
		*self.value.borrow_mut() = next.clone();

		if self.muted.get() {
			return;
		}

		let snapshot = self.observers.borrow().snapshot();
		tracing::trace!(observers = snapshot.len(), duplicate, "commit");

		for observer in snapshot {
			if duplicate && observer.remove_duplicates() {
				continue;
			}
			observer.on_change(&next);
		}
	}

	pub(crate) fn mute(&self) -> MuteGuard<'_> {
		MuteGuard {
			previous: self.muted.replace(true),
			muted: &self.muted,
		}
	}
}

pub(crate) struct MuteGuard<'a> {
	muted: &'a Cell<bool>,
	previous: bool,
}

impl Drop for MuteGuard<'_> {
	fn drop(&mut self) {
		self.muted.set(self.previous);
	}
}

impl<T> Debug for Store<T>
where
	T: 'static + Debug,
{
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.body.value.borrow().fmt(f)
	}
}
