/// Grows a success value by one trailing position.
///
/// Implemented for `()`, which is replaced by the new value, and for tuples of up
/// to six elements, which gain one more. [`Outcome::zip`](crate::Outcome::zip) pairs
/// two plain values; appending to the pair keeps growing the same tuple.
///
/// ```
/// use outcome_rail::TupleAppend;
///
/// assert_eq!(().append(1), 1);
/// assert_eq!((1, "a").append(2.5), (1, "a", 2.5));
/// ```
pub trait TupleAppend<R> {
    type Output;

    fn append(self, value: R) -> Self::Output;
}

impl<R> TupleAppend<R> for () {
    type Output = R;

    #[inline]
    fn append(self, value: R) -> R {
        value
    }
}

macro_rules! impl_tuple_append {
    ($($name:ident),+) => {
        impl<$($name,)+ R> TupleAppend<R> for ($($name,)+) {
            type Output = ($($name,)+ R);

            #[inline]
            #[allow(non_snake_case)]
            fn append(self, value: R) -> Self::Output {
                let ($($name,)+) = self;
                ($($name,)+ value)
            }
        }
    };
}

impl_tuple_append!(A);
impl_tuple_append!(A, B);
impl_tuple_append!(A, B, C);
impl_tuple_append!(A, B, C, D);
impl_tuple_append!(A, B, C, D, E);
impl_tuple_append!(A, B, C, D, E, F);
