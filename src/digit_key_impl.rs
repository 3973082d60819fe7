use crate::DigitKey;

impl DigitKey for u8 {
    #[inline]
    fn key(&self) -> u128 {
        *self as u128
    }
}

impl DigitKey for u16 {
    #[inline]
    fn key(&self) -> u128 {
        *self as u128
    }
}

impl DigitKey for u32 {
    #[inline]
    fn key(&self) -> u128 {
        *self as u128
    }
}

impl DigitKey for u64 {
    #[inline]
    fn key(&self) -> u128 {
        *self as u128
    }
}

impl DigitKey for u128 {
    #[inline]
    fn key(&self) -> u128 {
        *self
    }
}

impl DigitKey for usize {
    #[inline]
    fn key(&self) -> u128 {
        *self as u128
    }
}
