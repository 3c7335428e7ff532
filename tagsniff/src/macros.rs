macro_rules! try_vec {
	($elem:expr; $size:expr) => {{ $crate::util::alloc::fallible_vec_from_element($elem, $size)? }};
}

// Shorthand for return Err(TagSniffError::new(ErrorKind::Foo))
//
// Usage:
// - err!(Variant)          -> return Err(TagSniffError::new(ErrorKind::Variant))
// - err!(Variant(Message)) -> return Err(TagSniffError::new(ErrorKind::Variant(Message)))
macro_rules! err {
	($variant:ident) => {
		return Err(crate::error::TagSniffError::new(
			crate::error::ErrorKind::$variant,
		))
	};
	($variant:ident($reason:expr)) => {
		return Err(crate::error::TagSniffError::new(
			crate::error::ErrorKind::$variant($reason),
		))
	};
}

// Shorthand for MalformedHeaderError::new(TagFamily::Foo, "Message")
//
// Usage:
//
// - malformed_err!(Family, Message)
// - malformed_err!(Message)
//
// or bail:
//
// - malformed_err!(@BAIL Family, Message)
// - malformed_err!(@BAIL Message)
macro_rules! malformed_err {
	($family:ident, $reason:literal) => {
		Into::<crate::error::TagSniffError>::into(crate::error::MalformedHeaderError::new(
			crate::tag::TagFamily::$family,
			$reason,
		))
	};
	($reason:literal) => {
		Into::<crate::error::TagSniffError>::into(
			crate::error::MalformedHeaderError::from_description($reason),
		)
	};
	(@BAIL $($family:ident,)? $reason:literal) => {
		return Err(malformed_err!($($family,)? $reason))
	};
}

// A macro for handling the different `ParsingMode`s
//
// NOTE: All fields are optional, if `STRICT` or `RELAXED` are missing, it will
// 		 fall through to `DEFAULT`. If `DEFAULT` is missing, it will fall through
// 		 to an empty block.
//
// Usage:
//
// - parse_mode_choice!(
// 		ident_of_parsing_mode,
// 		STRICT: some_expr,
// 		RELAXED: some_expr,
// 		DEFAULT: some_expr,
// 	 )
macro_rules! parse_mode_choice {
	(
		$parse_mode:ident,
		$(STRICT: $strict_handler:expr,)?
		$(BESTATTEMPT: $best_attempt_handler:expr,)?
		$(RELAXED: $relaxed_handler:expr,)?
		DEFAULT: $default:expr
	) => {
		match $parse_mode {
			$(crate::config::ParsingMode::Strict => { $strict_handler },)?
			$(crate::config::ParsingMode::BestAttempt => { $best_attempt_handler },)?
			$(crate::config::ParsingMode::Relaxed => { $relaxed_handler },)?
			_ => { $default }
		}
	};
	(
		$parse_mode:ident,
		$(STRICT: $strict_handler:expr,)?
		$(BESTATTEMPT: $best_attempt_handler:expr,)?
		$(RELAXED: $relaxed_handler:expr $(,)?)?
	) => {
		match $parse_mode {
			$(crate::config::ParsingMode::Strict => { $strict_handler },)?
			$(crate::config::ParsingMode::BestAttempt => { $best_attempt_handler },)?
			$(crate::config::ParsingMode::Relaxed => { $relaxed_handler },)?
			#[allow(unreachable_patterns)]
			_ => {}
		}
	};
}

pub(crate) use {err, malformed_err, parse_mode_choice, try_vec};
