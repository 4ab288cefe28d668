pub trait Observer<T> {
	/// This function is called with the committed value
	/// after every mutation.
	fn on_change(&self, value: &T);

	/// When `true`, the store skips this observer whenever
	/// a mutation leaves the value unchanged.
	fn remove_duplicates(&self) -> bool {
		false
	}
}

pub struct Callback<T> {
	func: Box<dyn Fn(&T)>,
	remove_duplicates: bool,
}

impl<T> Callback<T> {
	pub fn new(func: impl Fn(&T) + 'static) -> Self {
		Callback {
			func: Box::new(func),
			remove_duplicates: false,
		}
	}

	pub fn deduped(func: impl Fn(&T) + 'static) -> Self {
		Callback {
			func: Box::new(func),
			remove_duplicates: true,
		}
	}
}

impl<T> Observer<T> for Callback<T> {
	fn on_change(&self, value: &T) {
		(self.func)(value)
	}

	fn remove_duplicates(&self) -> bool {
		self.remove_duplicates
	}
}
