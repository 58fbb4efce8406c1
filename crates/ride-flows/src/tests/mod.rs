mod trip_post;
