use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::maybe::{Absent, Maybe, Present};

impl<T: Serialize> Serialize for Maybe<T> {
  #[inline]
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    match self {
      Present(value) => serializer.serialize_some(value),
      Absent => serializer.serialize_none(),
    }
  }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Maybe<T> {
  #[inline]
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    Option::<T>::deserialize(deserializer).map(Maybe::from_option)
  }
}
