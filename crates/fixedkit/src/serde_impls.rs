use core::{fmt, marker::PhantomData};

use bstr::BStr;
use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{self, SeqAccess, Visitor},
    ser::{SerializeStruct, SerializeTuple},
};

use crate::{AttributeDescriptor, FixedArray, FormattingMode};

impl<T: Serialize, const N: usize> Serialize for FixedArray<T, N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tuple = serializer.serialize_tuple(N)?;
        for element in self {
            tuple.serialize_element(element)?;
        }
        tuple.end()
    }
}

struct FixedArrayVisitor<T, const N: usize>(PhantomData<T>);

impl<'de, T, const N: usize> Visitor<'de> for FixedArrayVisitor<T, N>
where
    T: Deserialize<'de> + Default,
{
    type Value = FixedArray<T, N>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a sequence of exactly {N} elements")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut array = FixedArray::<T, N>::default();
        for (i, slot) in array.iter_mut().enumerate() {
            *slot = seq
                .next_element()?
                .ok_or_else(|| <A::Error as de::Error>::invalid_length(i, &self))?;
        }
        if seq.next_element::<de::IgnoredAny>()?.is_some() {
            return Err(<A::Error as de::Error>::invalid_length(N + 1, &self));
        }
        Ok(array)
    }
}

impl<'de, T, const N: usize> Deserialize<'de> for FixedArray<T, N>
where
    T: Deserialize<'de> + Default,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_tuple(N, FixedArrayVisitor(PhantomData))
    }
}

impl Serialize for FormattingMode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i32(self.bits())
    }
}

impl<'de> Deserialize<'de> for FormattingMode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        i32::deserialize(deserializer).map(FormattingMode::from_bits_retain)
    }
}

/// Bytes written as a string, with invalid UTF-8 replaced.
struct Lossy<'a>(&'a [u8]);

impl Serialize for Lossy<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(BStr::new(self.0))
    }
}

impl Serialize for AttributeDescriptor<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("AttributeDescriptor", 4)?;
        state.serialize_field("id", &self.id)?;
        state.serialize_field("name", &Lossy(self.name))?;
        state.serialize_field("annotation", &Lossy(self.annotation.to_bytes()))?;
        state.serialize_field("formatting_mode", &self.formatting_mode)?;
        state.end()
    }
}
