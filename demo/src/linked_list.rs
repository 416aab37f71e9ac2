use std::{fmt, mem};

use perhaps_core::{Absent, Maybe, Present};

/// Node of a singly linked list, linking to its successor until the chain ends with [`Absent`].
pub struct Node<T> {
  value: T,
  next: Maybe<Box<Node<T>>>,
}
impl<T> Node<T> {
  #[inline]
  pub fn new(value: T) -> Self { Self { value, next: Absent } }

  #[inline]
  pub fn value(&self) -> &T { &self.value }

  #[inline]
  pub fn next(&self) -> Maybe<&Node<T>> { self.next.as_ref().map(|node| &**node) }
}

impl<T: fmt::Debug> fmt::Debug for Node<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Node").field("value", &self.value).finish_non_exhaustive()
  }
}

/// Singly linked list. Dropping, cloning, and appending walk the chain in a loop, so list length is not bounded by
/// stack depth.
pub struct LinkedList<T> {
  head: Maybe<Box<Node<T>>>,
}
impl<T> Default for LinkedList<T> {
  #[inline]
  fn default() -> Self { Self { head: Absent } }
}
impl<T> LinkedList<T> {
  #[inline]
  pub fn new() -> Self { Self::default() }

  #[inline]
  pub fn head(&self) -> Maybe<&Node<T>> { self.head.as_ref().map(|node| &**node) }

  #[inline]
  pub fn is_empty(&self) -> bool { self.head.is_absent() }

  pub fn push_front(&mut self, value: T) {
    let mut node = Node::new(value);
    node.next = mem::take(&mut self.head);
    self.head = Present(Box::new(node));
  }

  pub fn push_back(&mut self, value: T) {
    let mut link = &mut self.head;
    loop {
      // Move the cursor into the match so the tail link can be borrowed for the rest of the function.
      match { link } {
        Present(node) => link = &mut node.next,
        tail => {
          *tail = Present(Box::new(Node::new(value)));
          return;
        }
      }
    }
  }

  #[inline]
  pub fn iter(&self) -> Iter<'_, T> { Iter { current: self.head() } }
}

impl<T> Drop for LinkedList<T> {
  fn drop(&mut self) {
    let mut link = mem::take(&mut self.head);
    while let Present(mut node) = link {
      link = mem::take(&mut node.next);
    }
  }
}

impl<T: Clone> Clone for LinkedList<T> {
  fn clone(&self) -> Self { self.iter().map(|node| node.value.clone()).collect() }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_list().entries(self.iter().map(Node::value)).finish()
  }
}

impl<T> FromIterator<T> for LinkedList<T> {
  fn from_iter<I: IntoIterator<Item=T>>(iter: I) -> Self {
    let values: Vec<T> = iter.into_iter().collect();
    let mut list = Self::new();
    for value in values.into_iter().rev() {
      list.push_front(value);
    }
    list
  }
}

/// Prints the chain of nodes, for example `Node("first") -> Node("second") -> Absent()`.
impl<T: fmt::Debug> fmt::Display for LinkedList<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for node in self.iter() {
      write!(f, "Node({:?}) -> ", node.value)?;
    }
    write!(f, "{}", Maybe::<T>::Absent)
  }
}

/// Iterator over the nodes of a [`LinkedList`].
pub struct Iter<'a, T> {
  current: Maybe<&'a Node<T>>,
}
impl<'a, T> Iterator for Iter<'a, T> {
  type Item = &'a Node<T>;

  fn next(&mut self) -> Option<&'a Node<T>> {
    let node = mem::take(&mut self.current).to_option()?;
    self.current = node.next();
    Some(node)
  }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
  type Item = &'a Node<T>;
  type IntoIter = Iter<'a, T>;

  #[inline]
  fn into_iter(self) -> Iter<'a, T> { self.iter() }
}
