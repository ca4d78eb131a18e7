/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/10/26
******************************************************************************/
/// Transport seam and request pipeline
pub mod http;
/// Request models for API calls
pub mod requests;
/// Response models from API calls
pub mod responses;
/// Helpers combining several API calls
pub mod utils;
