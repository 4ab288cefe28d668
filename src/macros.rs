pub use enclose::*;

#[macro_export]
macro_rules! callback {
    (( $($d_tt:tt)* ) $value:ident : $t:ty => $($b:tt)*) => {
        $crate::Callback::new($crate::macros::enclose!(($( $d_tt )*) move |$value: &$t| { $($b)* }))
    };
    (( $($d_tt:tt)* ) $value:ident => $($b:tt)*) => {
        $crate::Callback::new($crate::macros::enclose!(($( $d_tt )*) move |$value: &_| { $($b)* }))
    };
    ($value:ident => $($b:tt)*) => {
        $crate::Callback::new(move |$value: &_| { $($b)* })
    };
}
