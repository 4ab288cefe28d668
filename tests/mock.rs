use std::sync::{Arc, Mutex, MutexGuard};

use mockall::*;

#[automock]
pub trait Spy<T: 'static> {
	fn trigger(&self, value: T);
}

pub struct SharedMock<T: 'static>(Arc<Mutex<MockSpy<T>>>);

impl<T> Clone for SharedMock<T> {
	fn clone(&self) -> Self {
		SharedMock(self.0.clone())
	}
}

impl<T> SharedMock<T> {
	pub fn new() -> SharedMock<T> {
		SharedMock(Arc::new(Mutex::new(MockSpy::new())))
	}

	pub fn get<'a>(&'a self) -> MutexGuard<'a, MockSpy<T>> {
		return self.0.lock().unwrap();
	}
}
