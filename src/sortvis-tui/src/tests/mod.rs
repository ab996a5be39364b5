#[cfg(test)]
pub mod support;

#[cfg(test)]
pub mod renderer_tests;


#[cfg(test)]
pub mod sink_tests;
