mod common;




#[cfg(test)]
mod test_round;

#[cfg(test)]
mod test_termination;
