// Constants for the Befunge interpreter

/// Stops the run when the pointer lands on it, in either mode
pub const HALT: char = '@';

/// Toggles string mode
pub const STRING_DELIMITER: char = '"';
