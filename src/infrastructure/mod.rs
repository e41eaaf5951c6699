pub mod classifiers;
