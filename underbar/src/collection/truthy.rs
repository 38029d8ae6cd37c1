//! Truthiness of values, as used by predicates and by the identity default of `every`/`some`.

/// A value that can be judged truthy or falsy.
///
/// Numbers are falsy when zero (floats also when NaN), text when empty, `Option` when `None` or when
/// the contained value is falsy, and `()` always. Everything else that implements the trait is judged by
/// its content.
pub trait Truthy {
	fn is_truthy(&self) -> bool;
}

impl Truthy for bool {
	fn is_truthy(&self) -> bool {
		*self
	}
}

macro_rules! impl_truthy_for_integers {
	($($t:ty),*) => {
		$(impl Truthy for $t {
			fn is_truthy(&self) -> bool {
				*self != 0
			}
		})*
	};
}

impl_truthy_for_integers!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Truthy for f32 {
	fn is_truthy(&self) -> bool {
		*self != 0.0 && !self.is_nan()
	}
}

impl Truthy for f64 {
	fn is_truthy(&self) -> bool {
		*self != 0.0 && !self.is_nan()
	}
}

impl Truthy for char {
	fn is_truthy(&self) -> bool {
		true
	}
}

impl Truthy for str {
	fn is_truthy(&self) -> bool {
		!self.is_empty()
	}
}

impl Truthy for String {
	fn is_truthy(&self) -> bool {
		!self.is_empty()
	}
}

impl Truthy for () {
	fn is_truthy(&self) -> bool {
		false
	}
}

impl<T: Truthy> Truthy for Option<T> {
	fn is_truthy(&self) -> bool {
		self.as_ref().is_some_and(Truthy::is_truthy)
	}
}

impl<T: Truthy + ?Sized> Truthy for &T {
	fn is_truthy(&self) -> bool {
		(**self).is_truthy()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(true, true)]
	#[case(false, false)]
	fn booleans(#[case] value: bool, #[case] expected: bool) {
		assert_eq!(value.is_truthy(), expected);
	}

	#[rstest]
	#[case(0, false)]
	#[case(1, true)]
	#[case(-7, true)]
	fn integers(#[case] value: i64, #[case] expected: bool) {
		assert_eq!(value.is_truthy(), expected);
	}

	#[rstest]
	#[case(0.0, false)]
	#[case(-0.0, false)]
	#[case(f64::NAN, false)]
	#[case(0.5, true)]
	#[case(f64::INFINITY, true)]
	fn floats(#[case] value: f64, #[case] expected: bool) {
		assert_eq!(value.is_truthy(), expected);
	}

	#[test]
	fn text_options_and_unit() {
		assert!(!"".is_truthy());
		assert!("a".is_truthy());
		assert!(String::from("b").is_truthy());
		assert!(!String::new().is_truthy());
		assert!('\0'.is_truthy());
		assert!(!().is_truthy());
		assert!(Some(3).is_truthy());
		assert!(!Some(0).is_truthy());
		assert!(!None::<u8>.is_truthy());
		assert!((&&5u8).is_truthy());
	}
}
