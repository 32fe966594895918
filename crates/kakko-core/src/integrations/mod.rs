//! Registration of kakko hooks with host coding assistants.

pub mod claude;
