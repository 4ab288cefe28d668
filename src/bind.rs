use std::rc::{Rc, Weak};

use crate::observer::Observer;
use crate::store::{Store, StoreBody};

pub(crate) fn bind<T, F, G, S>(parent: &Rc<StoreBody<T>>, get: G, set: S) -> Store<F>
where
	T: Clone + PartialEq + 'static,
	F: Clone + PartialEq + 'static,
	G: Fn(&T) -> F + 'static,
	S: Fn(&mut T, F) + 'static,
{
	let child = Store::new(get(&parent.current()));

	// Both subscriptions hold weak references and skip the
	// initial-sync call of a public registration.
	child.body.attach(Rc::new(WriteBack {
		parent: Rc::downgrade(parent),
		set,
	}));

	parent.attach(Rc::new(Forward {
		child: Rc::downgrade(&child.body),
		get,
	}));

	child
}

struct Forward<G, F> {
	child: Weak<StoreBody<F>>,
	get: G,
}

impl<T, F, G> Observer<T> for Forward<G, F>
where
	F: Clone + PartialEq + 'static,
	G: Fn(&T) -> F + 'static,
{
	fn on_change(&self, value: &T) {
		if let Some(child) = self.child.upgrade() {
			child.commit((self.get)(value));
		}
	}
}

struct WriteBack<S, T> {
	parent: Weak<StoreBody<T>>,
	set: S,
}

impl<T, F, S> Observer<F> for WriteBack<S, T>
where
	T: Clone + PartialEq + 'static,
	F: Clone,
	S: Fn(&mut T, F) + 'static,
{
	fn on_change(&self, value: &F) {
		if let Some(parent) = self.parent.upgrade() {
			// parent fan-out stays suspended while the write-back
			// runs; the guard restores on drop, unwinding included
			let _guard = parent.mute();
			parent.update(|next| (self.set)(next, value.clone()));
		}
	}
}
