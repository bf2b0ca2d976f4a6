use std::mem;

/*
 * RawBytes
 * this trait exposes the bytes of a value's in-place representation.
 * Types owning heap data (String, Vec, Box<[T]>) expose their descriptor
 * words, never the data they point to. Composite implementations append
 * their fields in declaration order; there is no implicit padding.
 */
pub trait RawBytes {
    /// Number of bytes `write_raw` appends, fixed by the type for sized values.
    fn byte_width(&self) -> usize;

    fn write_raw(&self, out: &mut Vec<u8>);

    fn raw_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.byte_width());
        self.write_raw(&mut out);

        out
    }
}

macro_rules! impl_raw_bytes_for_scalar {
    ($($kind:ty),*) => {
        $(
            impl RawBytes for $kind {
                fn byte_width(&self) -> usize {
                    mem::size_of::<$kind>()
                }

                fn write_raw(&self, out: &mut Vec<u8>) {
                    out.extend_from_slice(&self.to_ne_bytes());
                }
            }
        )*
    };
}

impl_raw_bytes_for_scalar!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64);

impl RawBytes for bool {
    fn byte_width(&self) -> usize {
        mem::size_of::<bool>()
    }

    fn write_raw(&self, out: &mut Vec<u8>) {
        out.push(u8::from(*self));
    }
}

impl RawBytes for char {
    fn byte_width(&self) -> usize {
        mem::size_of::<char>()
    }

    fn write_raw(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&u32::from(*self).to_ne_bytes());
    }
}

impl RawBytes for () {
    fn byte_width(&self) -> usize {
        0
    }

    fn write_raw(&self, _out: &mut Vec<u8>) {}
}

impl<T: RawBytes> RawBytes for [T] {
    fn byte_width(&self) -> usize {
        self.iter().map(RawBytes::byte_width).sum()
    }

    fn write_raw(&self, out: &mut Vec<u8>) {
        self.iter().for_each(|element| element.write_raw(out));
    }
}

impl<T: RawBytes, const N: usize> RawBytes for [T; N] {
    fn byte_width(&self) -> usize {
        self.as_slice().byte_width()
    }

    fn write_raw(&self, out: &mut Vec<u8>) {
        self.as_slice().write_raw(out)
    }
}

impl RawBytes for str {
    fn byte_width(&self) -> usize {
        self.len()
    }

    fn write_raw(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(self.as_bytes());
    }
}

fn push_word(out: &mut Vec<u8>, word: usize) {
    out.extend_from_slice(&word.to_ne_bytes());
}

// descriptor: pointer, length, capacity
impl RawBytes for String {
    fn byte_width(&self) -> usize {
        mem::size_of::<String>()
    }

    fn write_raw(&self, out: &mut Vec<u8>) {
        push_word(out, self.as_ptr() as usize);
        push_word(out, self.len());
        push_word(out, self.capacity());
    }
}

// descriptor: pointer, length, capacity
impl<T> RawBytes for Vec<T> {
    fn byte_width(&self) -> usize {
        mem::size_of::<Vec<T>>()
    }

    fn write_raw(&self, out: &mut Vec<u8>) {
        push_word(out, self.as_ptr() as usize);
        push_word(out, self.len());
        push_word(out, self.capacity());
    }
}

// descriptor: pointer, length
impl<T> RawBytes for Box<[T]> {
    fn byte_width(&self) -> usize {
        mem::size_of::<Box<[T]>>()
    }

    fn write_raw(&self, out: &mut Vec<u8>) {
        push_word(out, self.as_ptr() as usize);
        push_word(out, self.len());
    }
}

// a reference is the address it holds
impl<T> RawBytes for &T {
    fn byte_width(&self) -> usize {
        mem::size_of::<&T>()
    }

    fn write_raw(&self, out: &mut Vec<u8>) {
        push_word(out, *self as *const T as usize);
    }
}

macro_rules! impl_raw_bytes_for_tuple {
    ($($field:ident),+) => {
        impl<$($field: RawBytes),+> RawBytes for ($($field,)+) {
            #[allow(non_snake_case)]
            fn byte_width(&self) -> usize {
                let ($($field,)+) = self;
                0 $(+ $field.byte_width())+
            }

            #[allow(non_snake_case)]
            fn write_raw(&self, out: &mut Vec<u8>) {
                let ($($field,)+) = self;
                $($field.write_raw(out);)+
            }
        }
    };
}

impl_raw_bytes_for_tuple!(A, B);
impl_raw_bytes_for_tuple!(A, B, C);
impl_raw_bytes_for_tuple!(A, B, C, D);
