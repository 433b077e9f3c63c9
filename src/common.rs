//! Float method shims for `no_std` builds.

/// Defines a trait that routes float methods to libm when libstd is absent.
#[cfg(not(feature = "std"))]
macro_rules! define_float_funcs {
    ($(
        fn $name:ident(self $(,$arg:ident: $arg_ty:ty)*) -> $ret:ty
        => $lname:ident;
    )+) => {
        pub(crate) trait FloatFuncs: Sized {
            /// Special implementation for signum, because libm doesn't have it.
            fn signum(self) -> Self;

            $(fn $name(self $(,$arg: $arg_ty)*) -> $ret;)+
        }

        impl FloatFuncs for f64 {
            #[inline]
            fn signum(self) -> f64 {
                if self.is_nan() {
                    f64::NAN
                } else {
                    1.0_f64.copysign(self)
                }
            }

            $(fn $name(self $(,$arg: $arg_ty)*) -> $ret {
                #[cfg(feature = "libm")]
                return libm::$lname(self $(,$arg as _)*);

                #[cfg(not(feature = "libm"))]
                compile_error!("cubist requires either the `std` or `libm` feature")
            })+
        }
    }
}

#[cfg(not(feature = "std"))]
define_float_funcs! {
    fn abs(self) -> Self => fabs;
    fn acos(self) -> Self => acos;
    fn atan2(self, other: Self) -> Self => atan2;
    fn cbrt(self) -> Self => cbrt;
    fn copysign(self, sign: Self) -> Self => copysign;
    fn cos(self) -> Self => cos;
    fn cosh(self) -> Self => cosh;
    fn hypot(self, other: Self) -> Self => hypot;
    fn ln(self) -> Self => log;
    fn powf(self, n: Self) -> Self => pow;
    fn powi(self, n: i32) -> Self => pow;
    fn sin_cos(self) -> (Self, Self) => sincos;
    fn sinh(self) -> Self => sinh;
    fn sqrt(self) -> Self => sqrt;
}
