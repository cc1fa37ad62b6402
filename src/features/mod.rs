pub mod villas;
