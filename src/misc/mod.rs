/*!
Items of miscellaneous utility.
*/

pub mod log;
