// Bound and range tests
mod bounds;

mod decoration;

// Layout and document tests
mod document;
