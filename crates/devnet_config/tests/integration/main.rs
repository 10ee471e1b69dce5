mod load;
mod profile;
mod remote;
