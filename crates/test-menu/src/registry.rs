use alloc::vec::Vec;
use log::warn;

use crate::TestDescriptor;

/// Collects test cases before the runner starts.
///
/// Registration order is the order every selector and the menu use.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    cases: Vec<TestDescriptor>,
}

impl RegistryBuilder {
    pub const fn new() -> Self {
        Self { cases: Vec::new() }
    }

    /// Append one test case.
    pub fn register(&mut self, case: TestDescriptor) -> &mut Self {
        if self.cases.iter().any(|one| one.same_site(&case)) {
            warn!(
                "test `{}` ({}:{}) registered twice",
                case.name, case.file, case.line
            );
        }
        self.cases.push(case);
        self
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    pub fn build(self) -> Registry {
        Registry { cases: self.cases }
    }
}

impl Extend<TestDescriptor> for RegistryBuilder {
    fn extend<I: IntoIterator<Item = TestDescriptor>>(&mut self, iter: I) {
        for case in iter {
            self.register(case);
        }
    }
}

/// Frozen, read-only set of test cases.
#[derive(Debug, Default)]
pub struct Registry {
    cases: Vec<TestDescriptor>,
}

impl Registry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Walk all cases in registration order, always from the first one.
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(&self.cases)
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// 0-based lookup.
    pub fn get(&self, index: usize) -> Option<&TestDescriptor> {
        self.cases.get(index)
    }
}

impl FromIterator<TestDescriptor> for Registry {
    fn from_iter<I: IntoIterator<Item = TestDescriptor>>(iter: I) -> Self {
        let mut builder = RegistryBuilder::new();
        builder.extend(iter);
        builder.build()
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a TestDescriptor;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub struct Iter<'a> {
    data: &'a [TestDescriptor],
    iter: usize,
}

impl<'a> Iter<'a> {
    fn new(data: &'a [TestDescriptor]) -> Self {
        Iter { data, iter: 0 }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a TestDescriptor;

    fn next(&mut self) -> Option<Self::Item> {
        let out = self.data.get(self.iter)?;
        self.iter += 1;
        Some(out)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.data.len() - self.iter;
        (left, Some(left))
    }
}

impl ExactSizeIterator for Iter<'_> {}
